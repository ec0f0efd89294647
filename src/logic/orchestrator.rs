//! Thin caller contract: fetch the roster, generate matches, persist, activate.
//!
//! Host services (entity store, status flags) arrive as injected
//! collaborators; the generators themselves never see them.

use crate::logic::dispatch::generate_matches;
use crate::models::{BracketError, MatchDescriptor, TeamRef, TournamentFormat, TournamentId};
use crate::shuffle::Shuffler;
use log::info;

/// Error raised by an injected collaborator (the entity store).
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies the finalized, validated roster for a tournament. The core does no
/// dedup or validation beyond the team count.
pub trait RosterProvider {
    fn roster(&self, tournament_id: TournamentId) -> Result<Vec<TeamRef>, StoreError>;
}

/// Receives generated matches and tournament status changes.
pub trait MatchSink {
    fn save_matches(
        &mut self,
        tournament_id: TournamentId,
        matches: &[MatchDescriptor],
    ) -> Result<(), StoreError>;

    fn activate_tournament(&mut self, tournament_id: TournamentId) -> Result<(), StoreError>;
}

/// Errors from starting a tournament: match generation or the store.
#[derive(Debug)]
pub enum StartTournamentError {
    Bracket(BracketError),
    Store(StoreError),
}

impl std::fmt::Display for StartTournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartTournamentError::Bracket(e) => write!(f, "Match generation failed: {e}"),
            StartTournamentError::Store(e) => write!(f, "Store operation failed: {e}"),
        }
    }
}

impl std::error::Error for StartTournamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartTournamentError::Bracket(e) => Some(e),
            StartTournamentError::Store(e) => Some(e.as_ref()),
        }
    }
}

impl From<BracketError> for StartTournamentError {
    fn from(e: BracketError) -> Self {
        StartTournamentError::Bracket(e)
    }
}

/// Start a tournament: fetch the finalized roster, generate the initial
/// matches, persist them, and flip the tournament to active.
///
/// Returns the persisted match list. Either everything succeeds or nothing is
/// activated; there is no partial generation. Not safe to invoke concurrently
/// for the same tournament — callers serialize that themselves.
pub fn start_tournament(
    tournament_id: TournamentId,
    format: TournamentFormat,
    provider: &impl RosterProvider,
    sink: &mut impl MatchSink,
    shuffler: &mut impl Shuffler,
) -> Result<Vec<MatchDescriptor>, StartTournamentError> {
    let teams = provider
        .roster(tournament_id)
        .map_err(StartTournamentError::Store)?;
    let matches = generate_matches(tournament_id, format, &teams, shuffler)?;
    sink.save_matches(tournament_id, &matches)
        .map_err(StartTournamentError::Store)?;
    sink.activate_tournament(tournament_id)
        .map_err(StartTournamentError::Store)?;
    info!(
        "tournament {tournament_id} started: {} teams, {} {format} matches",
        teams.len(),
        matches.len()
    );
    Ok(matches)
}
