//! Swiss system, round 1: random pairing of consecutive teams.
//!
//! Later rounds pair by standings and are a separate concern; a
//! standings-based pairer would live alongside this module, not inside it.

use crate::models::{BracketError, MatchDescriptor, TeamRef, TournamentId};
use crate::shuffle::Shuffler;

/// Generate Swiss round 1: shuffle, then pair consecutive entries.
///
/// An odd roster leaves the last seeded team idle for the round. No bye match
/// is emitted for it — Swiss does not auto-advance anyone, unlike the
/// elimination bracket. Returns `floor(N / 2)` pending matches.
pub fn generate_swiss_matches(
    tournament_id: TournamentId,
    teams: &[TeamRef],
    shuffler: &mut impl Shuffler,
) -> Result<Vec<MatchDescriptor>, BracketError> {
    if teams.len() < 2 {
        return Err(BracketError::InsufficientTeams { found: teams.len() });
    }

    let mut seeded = teams.to_vec();
    shuffler.shuffle(&mut seeded);

    let matches = seeded
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            MatchDescriptor::pending(
                tournament_id,
                1,
                (i + 1) as u32,
                pair[0].clone(),
                pair[1].clone(),
            )
        })
        .collect();

    Ok(matches)
}
