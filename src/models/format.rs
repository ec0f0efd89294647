//! Tournament formats and match-generation errors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Errors that can occur during match generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Fewer than two teams supplied to a generator.
    InsufficientTeams { found: usize },
    /// Format dispatch received an unrecognized format name.
    UnsupportedFormat(String),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InsufficientTeams { found } => {
                write!(f, "Need at least 2 teams to generate matches (found {found})")
            }
            BracketError::UnsupportedFormat(name) => {
                write!(f, "Unsupported tournament format: {name}")
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Supported tournament formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    SingleElimination,
    /// First-round winners bracket only; no losers bracket is generated.
    DoubleElimination,
    RoundRobin,
    Swiss,
}

impl TournamentFormat {
    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimination => "single_elimination",
            TournamentFormat::DoubleElimination => "double_elimination",
            TournamentFormat::RoundRobin => "round_robin",
            TournamentFormat::Swiss => "swiss",
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_elimination" => Ok(TournamentFormat::SingleElimination),
            "double_elimination" => Ok(TournamentFormat::DoubleElimination),
            "round_robin" => Ok(TournamentFormat::RoundRobin),
            "swiss" => Ok(TournamentFormat::Swiss),
            other => Err(BracketError::UnsupportedFormat(other.to_string())),
        }
    }
}
