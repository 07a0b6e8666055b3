//! Core value types shared by every bracket component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A competitor's seed rank: its 1-based position in the input roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(pub usize);

impl Seed {
    /// Zero-based index into the roster
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

/// Which side of the bracket a round belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    Winner,
    Loser,
    Championship,
}

impl RoundType {
    /// Capitalised prefix used in round labels ("Winner 2").
    pub fn label_prefix(self) -> &'static str {
        match self {
            RoundType::Winner => "Winner",
            RoundType::Loser => "Loser",
            RoundType::Championship => "Championship",
        }
    }
}

/// Address of a match: round number plus match number within that round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchRef {
    pub round: u32,
    #[serde(rename = "match")]
    pub match_number: u32,
}

impl MatchRef {
    pub fn new(round: u32, match_number: u32) -> Self {
        Self {
            round,
            match_number,
        }
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{} M{}", self.round, self.match_number)
    }
}

/// Which result of an upstream match sends a player into a downstream one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// A single match in the generated bracket.
///
/// Player slots left as `None` are placeholders, filled by whoever records
/// results and walks `win_advance`/`loss_advance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match<P> {
    pub round: u32,
    pub round_type: RoundType,
    #[serde(rename = "match")]
    pub match_number: u32,
    pub player1: Option<P>,
    pub player2: Option<P>,
    /// Where the winner goes; absent only for the championship
    #[serde(rename = "win", default, skip_serializing_if = "Option::is_none")]
    pub win_advance: Option<MatchRef>,
    /// Where the loser goes; absent when losing eliminates
    #[serde(rename = "loss", default, skip_serializing_if = "Option::is_none")]
    pub loss_advance: Option<MatchRef>,
}

impl<P> Match<P> {
    pub fn reference(&self) -> MatchRef {
        MatchRef::new(self.round, self.match_number)
    }

    /// Number of player slots already filled at generation time
    pub fn seeded_players(&self) -> usize {
        self.player1.is_some() as usize + self.player2.is_some() as usize
    }
}
