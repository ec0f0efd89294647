//! Data structures for match generation: teams, match descriptors, formats.

mod format;
mod matches;
mod team;

pub use format::{BracketError, TournamentFormat};
pub use matches::{MatchDescriptor, MatchStatus, TournamentId};
pub use team::{TeamId, TeamRef};
