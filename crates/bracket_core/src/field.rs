//! Field geometry: how a roster size maps onto a power-of-two bracket.

use crate::error::BracketError;

/// How the players above the largest power of two are absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByeClass {
    /// The field is an exact power of two
    None,
    /// Play-in losers fit into a single loser pre-round
    Small,
    /// Play-in losers need two loser pre-rounds
    Large,
}

/// Size facts about a field of players, all derived from the count alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub players: usize,
    /// `floor(log2(players))`
    pub exponent: u32,
    /// Players beyond `2^exponent`; one play-in match each
    pub remainder: usize,
}

impl Field {
    pub fn new(players: usize) -> Result<Self, BracketError> {
        if players < 2 {
            return Err(BracketError::NotEnoughPlayers { count: players });
        }
        let exponent = players.ilog2();
        Ok(Self {
            players,
            exponent,
            remainder: players - (1 << exponent),
        })
    }

    /// Number of players in the first full winner round, `2^exponent`.
    pub fn bracket_size(&self) -> usize {
        1 << self.exponent
    }

    pub fn half(&self) -> usize {
        self.bracket_size() / 2
    }

    pub fn bye_class(&self) -> ByeClass {
        if self.remainder == 0 {
            ByeClass::None
        } else if self.remainder <= self.half() {
            ByeClass::Small
        } else {
            ByeClass::Large
        }
    }

    pub fn has_play_in(&self) -> bool {
        self.remainder > 0
    }

    /// Winner rounds including the play-in round, if any.
    pub fn winner_round_count(&self) -> u32 {
        self.exponent + self.has_play_in() as u32
    }

    /// Match counts of every loser round, in play order.
    pub fn loser_round_sizes(&self) -> Vec<usize> {
        if self.exponent == 1 {
            // Two players need no loser bracket; three need a single match.
            return vec![1; self.remainder];
        }

        let mut sizes = match self.bye_class() {
            ByeClass::None => Vec::new(),
            ByeClass::Small => vec![self.remainder],
            ByeClass::Large => vec![self.remainder - self.half(), self.half()],
        };
        for e in (0..self.exponent - 1).rev() {
            sizes.push(1 << e);
            sizes.push(1 << e);
        }
        sizes
    }

    pub fn loser_round_count(&self) -> u32 {
        self.loser_round_sizes().len() as u32
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
