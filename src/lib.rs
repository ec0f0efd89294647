//! Tournament match generation core: models and per-format generators.

pub mod logic;
pub mod models;
pub mod shuffle;

pub use logic::{
    generate_matches, generate_round_robin_matches, generate_single_elimination_matches,
    generate_swiss_matches, start_tournament, MatchSink, RosterProvider, StartTournamentError,
    StoreError,
};
pub use models::{
    BracketError, MatchDescriptor, MatchStatus, TeamId, TeamRef, TournamentFormat, TournamentId,
};
pub use shuffle::{NoShuffle, SeededShuffler, Shuffler, ThreadRngShuffler};
