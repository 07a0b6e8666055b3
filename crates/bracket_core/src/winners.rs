//! Winner-bracket layout: play-in round, full rounds, seeding and byes.

use tracing::debug;

use crate::draft::{Draft, RoundPlan};
use crate::field::Field;
use crate::seeding::seed_order;
use crate::types::{RoundType, Seed};

/// Rounds of the winner side as laid out in the draft.
#[derive(Clone, Debug)]
pub struct WinnerBracket {
    pub play_in: Option<RoundPlan>,
    /// Full rounds, halving from `2^(exponent-1)` matches down to the final
    pub rounds: Vec<RoundPlan>,
}

impl WinnerBracket {
    pub fn first_full(&self) -> RoundPlan {
        self.rounds[0]
    }

    pub fn final_round(&self) -> RoundPlan {
        self.rounds[self.rounds.len() - 1]
    }

    /// Every winner round in play order, play-in first.
    pub fn all_rounds(&self) -> Vec<RoundPlan> {
        self.play_in.iter().chain(&self.rounds).copied().collect()
    }
}

pub fn build_winner_bracket(field: &Field, starting_round: u32, draft: &mut Draft) -> WinnerBracket {
    let mut round = starting_round;

    let play_in = if field.has_play_in() {
        let plan = draft.push_round(round, RoundType::Winner, field.remainder as u32);
        round += 1;
        Some(plan)
    } else {
        None
    };

    let mut rounds = Vec::with_capacity(field.exponent as usize);
    for e in (0..field.exponent).rev() {
        rounds.push(draft.push_round(round, RoundType::Winner, 1 << e));
        round += 1;
    }

    for pair in rounds.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for m in 1..=from.matches {
            draft.link_win(from.at(m), to.at(m.div_ceil(2)));
        }
    }

    let bracket = WinnerBracket { play_in, rounds };
    seed_first_round(field, &bracket, draft);
    if let Some(play_in) = bracket.play_in {
        resolve_byes(field, play_in, bracket.first_full(), draft);
    }

    debug!(
        first = starting_round,
        last = bracket.final_round().number,
        play_in = field.remainder,
        "winner bracket laid out"
    );
    bracket
}

/// Fill the first full round from the canonical seeding order.
fn seed_first_round(field: &Field, bracket: &WinnerBracket, draft: &mut Draft) {
    let first = bracket.first_full();
    for (i, pair) in seed_order(field.exponent).chunks(2).enumerate() {
        draft.set_players(first.at(i as u32 + 1), [Some(pair[0]), Some(pair[1])]);
    }
}

/// Move the lowest first-round seeds into the play-in round.
///
/// Play-in match `i` pits seed `2^e + 1 + i` against seed `2^e - i`; the
/// latter's first-round slot is emptied and fed by the play-in's winner.
fn resolve_byes(field: &Field, play_in: RoundPlan, first: RoundPlan, draft: &mut Draft) {
    let size = field.bracket_size();

    // seed rank -> (match number, slot index) in the first full round
    let mut positions = vec![(0u32, 0usize); size + 1];
    for (pos, seed) in seed_order(field.exponent).into_iter().enumerate() {
        positions[seed.0] = (pos as u32 / 2 + 1, pos % 2);
    }

    for i in 0..field.remainder {
        let entrant = Seed(size + 1 + i);
        let displaced = Seed(size - i);
        let (match_number, slot) = positions[displaced.0];

        draft.clear_slot(first.at(match_number), slot);
        let at = play_in.at(i as u32 + 1);
        draft.set_players(at, [Some(entrant), Some(displaced)]);
        draft.link_win(at, first.at(match_number));
    }
}

#[cfg(test)]
#[path = "winners_tests.rs"]
mod tests;
