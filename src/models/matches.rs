//! Match descriptor: the unit of generator output, plus its builder constructors.

use crate::models::team::TeamRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament (owned by the external store).
pub type TournamentId = Uuid;

/// Whether a match still needs to be played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    /// Auto-resolved bye: the winner is already known.
    Completed,
}

/// A generated match: two team slots (a `None` slot is a bye), a round number,
/// a bracket position within the round, and a resolution status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchDescriptor {
    pub tournament_id: TournamentId,
    /// None when this side of the slot is unassigned (bye).
    pub team1: Option<TeamRef>,
    pub team2: Option<TeamRef>,
    /// 1 for the first-round matches this core produces.
    pub round: u32,
    /// 1-based position within the round; unique per generation call.
    pub sequence: u32,
    pub status: MatchStatus,
    /// Set only for auto-resolved byes: the surviving team.
    pub winner: Option<TeamRef>,
    /// Placeholder; the store reschedules at persistence time.
    pub scheduled_at: DateTime<Utc>,
}

impl MatchDescriptor {
    /// A regular match between two assigned teams.
    pub fn pending(
        tournament_id: TournamentId,
        round: u32,
        sequence: u32,
        team1: TeamRef,
        team2: TeamRef,
    ) -> Self {
        Self {
            tournament_id,
            team1: Some(team1),
            team2: Some(team2),
            round,
            sequence,
            status: MatchStatus::Pending,
            winner: None,
            scheduled_at: Utc::now(),
        }
    }

    /// A bye: a single assigned team that advances automatically.
    pub fn bye(tournament_id: TournamentId, round: u32, sequence: u32, team: TeamRef) -> Self {
        Self {
            tournament_id,
            team1: Some(team.clone()),
            team2: None,
            round,
            sequence,
            status: MatchStatus::Completed,
            winner: Some(team),
            scheduled_at: Utc::now(),
        }
    }

    /// True when exactly one team slot is assigned.
    pub fn is_bye(&self) -> bool {
        self.team1.is_some() != self.team2.is_some()
    }

    /// Number of assigned team slots (0 cannot occur for generated matches).
    pub fn assigned_teams(&self) -> usize {
        usize::from(self.team1.is_some()) + usize::from(self.team2.is_some())
    }
}
