//! Single-elimination bracket: first-round match generation with byes.

use crate::models::{BracketError, MatchDescriptor, TeamRef, TournamentId};
use crate::shuffle::Shuffler;
use log::debug;

/// Generate the first round of a single-elimination bracket.
///
/// 1. Shuffle the roster via the injected [`Shuffler`]; the result is the
///    seeding order.
/// 2. Size the bracket to the next power of two; half of that is the number of
///    first-round match slots.
/// 3. Lay the seeded roster into paired positions: slot `i` takes positions
///    `i` and `slots + i`. There are fewer slots than teams, so every slot
///    gets a first team; slots whose second position falls past the roster
///    end become byes (completed, the present team advances).
///
/// Always returns exactly `slots` matches in ascending sequence order, with
/// `bracket_size - N` of them resolved as byes.
pub fn generate_single_elimination_matches(
    tournament_id: TournamentId,
    teams: &[TeamRef],
    shuffler: &mut impl Shuffler,
) -> Result<Vec<MatchDescriptor>, BracketError> {
    if teams.len() < 2 {
        return Err(BracketError::InsufficientTeams { found: teams.len() });
    }

    let mut seeded = teams.to_vec();
    shuffler.shuffle(&mut seeded);

    let bracket_size = seeded.len().next_power_of_two();
    let slots = bracket_size / 2;
    debug!(
        "single elimination: {} teams, {} first-round slots, {} byes",
        seeded.len(),
        slots,
        bracket_size - seeded.len()
    );

    let mut matches = Vec::with_capacity(slots);
    for i in 0..slots {
        let sequence = (i + 1) as u32;
        let team1 = seeded[i].clone();
        match seeded.get(slots + i) {
            Some(team2) => matches.push(MatchDescriptor::pending(
                tournament_id,
                1,
                sequence,
                team1,
                team2.clone(),
            )),
            None => matches.push(MatchDescriptor::bye(tournament_id, 1, sequence, team1)),
        }
    }

    Ok(matches)
}
