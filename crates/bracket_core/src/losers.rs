//! Loser-bracket layout and loss routing.
//!
//! Losers of each winner round are dropped into loser rounds in an order
//! given by [`fill_pattern`]. The pattern rotates with every pass, so
//! players who met in the winner bracket are kept apart in the loser
//! bracket for as long as the shape allows. Fields with play-ins first run
//! one of the remainder-specific passes to absorb play-in losers, then all
//! fields continue in lockstep with the remaining winner rounds.

use tracing::debug;

use crate::draft::{Draft, RoundPlan};
use crate::field::{ByeClass, Field};
use crate::types::{MatchRef, RoundType};
use crate::winners::WinnerBracket;

/// Order in which `match_count` upstream matches are routed, 1-based.
///
/// The rotation step `fill_count % 4` picks one of:
/// - 0: identity
/// - 1: reversed
/// - 2: each half reversed, halves kept in place
/// - 3: halves swapped, each half kept in order
///
/// Halves split at `match_count / 2`.
pub fn fill_pattern(match_count: usize, fill_count: usize) -> Vec<u32> {
    let order: Vec<u32> = (1..=match_count as u32).collect();
    let (front, back) = order.split_at(match_count / 2);
    match fill_count % 4 {
        0 => order.clone(),
        1 => order.iter().rev().copied().collect(),
        2 => front.iter().rev().chain(back.iter().rev()).copied().collect(),
        _ => back.iter().chain(front).copied().collect(),
    }
}

/// Where the lockstep pass resumes after the opening pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursor {
    /// Next winner round (index into the play-order winner rounds)
    winner: usize,
    /// First loser round the lockstep pass may drop into
    loser: usize,
}

/// Routing state for one generation call.
struct LoserRouting<'a> {
    draft: &'a mut Draft,
    winner_rounds: Vec<RoundPlan>,
    loser_rounds: Vec<RoundPlan>,
    championship: MatchRef,
    fill_count: usize,
}

impl LoserRouting<'_> {
    /// Consume the current fill pattern and advance the counter.
    fn next_fill(&mut self, match_count: u32) -> Vec<u32> {
        let fill = fill_pattern(match_count as usize, self.fill_count);
        self.fill_count += 1;
        fill
    }

    fn loser_size(&self, index: usize) -> u32 {
        self.loser_rounds.get(index).map_or(0, |r| r.matches)
    }

    /// Fields of two or three players have a degenerate loser side.
    fn route_minimal(&mut self) {
        match (self.winner_rounds.as_slice(), self.loser_rounds.first()) {
            ([play_in, winner_final], Some(&only)) => {
                self.draft.link_loss(play_in.at(1), only.at(1));
                self.draft.link_loss(winner_final.at(1), only.at(1));
                self.draft.link_win(only.at(1), self.championship);
            }
            ([winner_final], None) => {
                self.draft.link_loss(winner_final.at(1), self.championship);
            }
            _ => unreachable!("minimal fields have one or two winner rounds"),
        }
    }

    /// Power-of-two field: first-round losers pair up in loser round 1.
    fn route_standard(&mut self) -> Cursor {
        let source = self.winner_rounds[0];
        let target = self.loser_rounds[0];
        let fill = self.next_fill(source.matches);

        for (j, pair) in fill.chunks(2).enumerate() {
            for &m in pair {
                self.draft.link_loss(source.at(m), target.at(j as u32 + 1));
            }
        }
        Cursor { winner: 1, loser: 1 }
    }

    /// Play-in losers each open a pre-round match.
    ///
    /// Their opponents are first-full-round losers that would otherwise
    /// land in a loser match fed by a bye-affected pair; the pre-round
    /// winner takes that place instead.
    fn route_small_remainder(&mut self) -> Cursor {
        let (play_in, first) = (self.winner_rounds[0], self.winner_rounds[1]);
        let (pre, entry) = (self.loser_rounds[0], self.loser_rounds[1]);

        let fill = self.next_fill(play_in.matches);
        for (i, &m) in fill.iter().enumerate() {
            self.draft.link_loss(play_in.at(m), pre.at(i as u32 + 1));
        }

        let reroutes: Vec<u32> = first
            .refs()
            .filter(|&at| self.draft.empty_slots(at) > 0)
            .map(|at| at.match_number.div_ceil(2))
            .collect();
        let mut pending = reroutes.clone();
        let mut detours = 0;

        let fill = self.next_fill(first.matches);
        for (j, pair) in fill.chunks(2).enumerate() {
            let target = j as u32 + 1;
            for &m in pair {
                if let Some(pos) = pending.iter().position(|&r| r == target) {
                    pending.remove(pos);
                    detours += 1;
                    self.draft.link_loss(first.at(m), pre.at(detours));
                } else {
                    self.draft.link_loss(first.at(m), entry.at(target));
                }
            }
        }

        for (i, &r) in reroutes.iter().enumerate() {
            self.draft.link_win(pre.at(i as u32 + 1), entry.at(r));
        }
        debug!(reroutes = ?reroutes, "small remainder routed");
        Cursor { winner: 2, loser: 2 }
    }

    /// More play-ins than one loser round can hold.
    ///
    /// Play-in losers whose winner-bracket match was fed by two play-ins
    /// meet each other in the first pre-round; the rest wait in the second
    /// pre-round for first-full-round losers.
    fn route_large_remainder(&mut self) -> Cursor {
        let (play_in, first) = (self.winner_rounds[0], self.winner_rounds[1]);
        let (pre, entry) = (self.loser_rounds[0], self.loser_rounds[1]);

        let reroutes: Vec<u32> = first
            .refs()
            .filter(|&at| self.draft.empty_slots(at) == 2)
            .map(|at| at.match_number)
            .collect();

        let fill = self.next_fill(play_in.matches);
        let mut order = fill.into_iter();
        let mut detours = 0;
        for target in 1..=entry.matches {
            let Some(m) = order.next() else { break };
            if reroutes.contains(&target) {
                detours += 1;
                self.draft.link_loss(play_in.at(m), pre.at(detours));
                if let Some(partner) = order.next() {
                    self.draft.link_loss(play_in.at(partner), pre.at(detours));
                }
            } else {
                self.draft.link_loss(play_in.at(m), entry.at(target));
            }
        }

        for (i, &r) in reroutes.iter().enumerate() {
            self.draft.link_win(pre.at(i as u32 + 1), entry.at(r));
        }
        debug!(reroutes = ?reroutes, "large remainder routed");
        Cursor { winner: 1, loser: 1 }
    }

    /// Drop every remaining winner round into the loser bracket.
    ///
    /// When two adjacent loser rounds have the same size the first is a
    /// survivors-only round, so the drop goes one round further and every
    /// later index shifts by one.
    fn route_lockstep(&mut self, cursor: Cursor) {
        let mut fast_forward = 0;
        let sources: Vec<RoundPlan> = self.winner_rounds[cursor.winner..].to_vec();

        for (step, source) in sources.into_iter().enumerate() {
            let mut index = cursor.loser + step + fast_forward;
            if self.loser_size(index) == self.loser_size(index + 1) {
                index += 1;
                fast_forward += 1;
            }
            let target = self.loser_rounds[index];
            debug_assert_eq!(source.matches, target.matches);

            let fill = self.next_fill(source.matches);
            for (j, &m) in fill.iter().enumerate() {
                self.draft.link_loss(source.at(m), target.at(j as u32 + 1));
            }
        }
        debug!(fast_forward, fills = self.fill_count, "lockstep routing done");
    }

    /// Loser round winners advance pairwise, or one-to-one into a round of
    /// the same size; the loser final feeds the championship.
    fn link_survivors(&mut self, start: usize) {
        for pair in self.loser_rounds[start..].windows(2) {
            let (from, to) = (pair[0], pair[1]);
            for m in 1..=from.matches {
                let target = if from.matches == to.matches {
                    m
                } else {
                    m.div_ceil(2)
                };
                self.draft.link_win(from.at(m), to.at(target));
            }
        }
        if let Some(last) = self.loser_rounds.last() {
            self.draft.link_win(last.at(1), self.championship);
        }
    }
}

/// Lay out the loser rounds right after the winner final and route every
/// loss into them.
pub fn build_loser_bracket(
    field: &Field,
    winners: &WinnerBracket,
    championship: RoundPlan,
    draft: &mut Draft,
) -> Vec<RoundPlan> {
    let mut number = winners.final_round().number;
    let loser_rounds: Vec<RoundPlan> = field
        .loser_round_sizes()
        .into_iter()
        .map(|size| {
            number += 1;
            draft.push_round(number, RoundType::Loser, size as u32)
        })
        .collect();

    let mut routing = LoserRouting {
        draft,
        winner_rounds: winners.all_rounds(),
        loser_rounds,
        championship: championship.at(1),
        fill_count: 0,
    };

    let bye_class = field.bye_class();
    debug!(
        exponent = field.exponent,
        remainder = field.remainder,
        ?bye_class,
        rounds = routing.loser_rounds.len(),
        "laying out loser bracket"
    );

    if field.exponent == 1 {
        routing.route_minimal();
        return routing.loser_rounds;
    }

    let (cursor, survivors_from) = match bye_class {
        ByeClass::None => (routing.route_standard(), 0),
        ByeClass::Small => (routing.route_small_remainder(), 1),
        ByeClass::Large => (routing.route_large_remainder(), 1),
    };
    routing.route_lockstep(cursor);
    routing.link_survivors(survivors_from);

    routing.loser_rounds
}

#[cfg(test)]
#[path = "losers_tests.rs"]
mod tests;
