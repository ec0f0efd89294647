//! Round robin: every team plays every other team exactly once.

use crate::models::{BracketError, MatchDescriptor, TeamRef, TournamentId};

/// Generate the complete round-robin fixture list.
///
/// One match per unordered pair in input order (no shuffling): outer index
/// ascending, then inner. The whole list is tagged round 1 rather than split
/// into groups of simultaneous matches; callers that want balanced rounds
/// regroup the fixtures downstream. Total matches: `N * (N - 1) / 2`.
pub fn generate_round_robin_matches(
    tournament_id: TournamentId,
    teams: &[TeamRef],
) -> Result<Vec<MatchDescriptor>, BracketError> {
    if teams.len() < 2 {
        return Err(BracketError::InsufficientTeams { found: teams.len() });
    }

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    let mut sequence = 0u32;
    for (i, team1) in teams.iter().enumerate() {
        for team2 in &teams[i + 1..] {
            sequence += 1;
            matches.push(MatchDescriptor::pending(
                tournament_id,
                1,
                sequence,
                team1.clone(),
                team2.clone(),
            ));
        }
    }

    Ok(matches)
}
