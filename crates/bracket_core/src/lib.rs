//! Double-elimination bracket generation
//!
//! Given players in seed order, this crate lays out every match of a
//! double-elimination tournament:
//! - the winner bracket, with play-in matches when the field is not a
//!   power of two
//! - the loser bracket, with loss routing that keeps early rematches rare
//! - a single championship match fed by both finals
//! - a display label for every round
//!
//! Only the static match graph is produced. Recording results and filling
//! placeholder slots by walking `win_advance`/`loss_advance` is left to the
//! caller.
//!
//! # Usage
//!
//! ```
//! use bracket_core::{generate, RoundType};
//!
//! let bracket = generate(&["A", "B", "C", "D"]).unwrap();
//! let first = &bracket.matches[0];
//! assert_eq!((first.player1, first.player2), (Some("A"), Some("D")));
//! assert_eq!(bracket.rounds_of(RoundType::Winner), vec![1, 2]);
//! ```

mod bracket;
mod championship;
mod draft;
mod error;
mod field;
mod labels;
mod losers;
mod report;
mod roster;
mod seeding;
mod types;
mod winners;

pub use bracket::Bracket;
pub use error::BracketError;
pub use field::{ByeClass, Field};
pub use labels::label_rounds;
pub use losers::fill_pattern;
pub use roster::parse_roster;
pub use seeding::seed_order;
pub use types::*;

use tracing::debug;

/// Options for a generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketOptions {
    /// Round number of the first match; later rounds count up from here
    pub starting_round: u32,
}

impl Default for BracketOptions {
    fn default() -> Self {
        Self { starting_round: 1 }
    }
}

/// Generate a bracket starting at round 1.
pub fn generate<P: Clone>(players: &[P]) -> Result<Bracket<P>, BracketError> {
    generate_with(players, &BracketOptions::default())
}

/// Generate a bracket for `players`, ranked by their position (first entry
/// is seed 1).
///
/// The same roster always yields the same bracket.
pub fn generate_with<P: Clone>(
    players: &[P],
    options: &BracketOptions,
) -> Result<Bracket<P>, BracketError> {
    if options.starting_round == 0 {
        return Err(BracketError::InvalidStartingRound { round: 0 });
    }
    let field = Field::new(players.len())?;

    // The championship takes the last round number.
    let span = field.winner_round_count() + field.loser_round_count();
    if options.starting_round.checked_add(span).is_none() {
        return Err(BracketError::StartingRoundTooLate {
            round: options.starting_round,
            rounds: span + 1,
        });
    }
    debug!(
        players = field.players,
        exponent = field.exponent,
        remainder = field.remainder,
        starting_round = options.starting_round,
        "generating double-elimination bracket"
    );

    let mut draft = draft::Draft::default();
    let winners = winners::build_winner_bracket(&field, options.starting_round, &mut draft);
    let championship = championship::link_championship(&field, &winners, &mut draft);
    losers::build_loser_bracket(&field, &winners, championship, &mut draft);

    let matches = draft.finish(players);
    let rounds = label_rounds(&matches);
    Ok(Bracket::new(matches, rounds))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
