//! Format dispatch: one entry point over all match generators.

use crate::logic::round_robin::generate_round_robin_matches;
use crate::logic::single_elimination::generate_single_elimination_matches;
use crate::logic::swiss::generate_swiss_matches;
use crate::models::{BracketError, MatchDescriptor, TeamRef, TournamentFormat, TournamentId};
use crate::shuffle::Shuffler;
use log::warn;

/// Generate the initial matches for a tournament in the given format.
///
/// Pure dispatch; no generator keeps state across calls. Re-invoking with the
/// same inputs is structurally idempotent, though shuffled formats reseed each
/// call unless the caller injects a deterministic [`Shuffler`].
pub fn generate_matches(
    tournament_id: TournamentId,
    format: TournamentFormat,
    teams: &[TeamRef],
    shuffler: &mut impl Shuffler,
) -> Result<Vec<MatchDescriptor>, BracketError> {
    match format {
        TournamentFormat::SingleElimination => {
            generate_single_elimination_matches(tournament_id, teams, shuffler)
        }
        TournamentFormat::DoubleElimination => {
            // Winners bracket round 1 only; the losers bracket needs product
            // rules for seeding and advancement before it can be built.
            warn!("double elimination: no losers bracket, generating winners round 1 only");
            generate_single_elimination_matches(tournament_id, teams, shuffler)
        }
        TournamentFormat::RoundRobin => generate_round_robin_matches(tournament_id, teams),
        TournamentFormat::Swiss => generate_swiss_matches(tournament_id, teams, shuffler),
    }
}
