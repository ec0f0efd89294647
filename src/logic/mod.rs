//! Match generation logic: per-format generators, dispatch, and the caller contract.

mod dispatch;
mod orchestrator;
mod round_robin;
mod single_elimination;
mod swiss;

pub use dispatch::generate_matches;
pub use orchestrator::{
    start_tournament, MatchSink, RosterProvider, StartTournamentError, StoreError,
};
pub use round_robin::generate_round_robin_matches;
pub use single_elimination::generate_single_elimination_matches;
pub use swiss::generate_swiss_matches;
