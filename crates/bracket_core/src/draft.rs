//! Working state for one generation call.
//!
//! Rounds are appended once and never reordered. Player slots and links are
//! kept in maps keyed by [`MatchRef`], so every lookup during routing is
//! direct. [`Draft::finish`] turns the whole thing into immutable matches.

use std::collections::HashMap;

use tracing::trace;

use crate::types::{Match, MatchRef, RoundType, Seed};

/// One round as laid out by a builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundPlan {
    pub number: u32,
    pub round_type: RoundType,
    pub matches: u32,
}

impl RoundPlan {
    /// Reference to the 1-based match `match_number` of this round
    pub fn at(&self, match_number: u32) -> MatchRef {
        debug_assert!(match_number >= 1 && match_number <= self.matches);
        MatchRef::new(self.number, match_number)
    }

    pub fn refs(&self) -> impl Iterator<Item = MatchRef> + '_ {
        (1..=self.matches).map(move |m| self.at(m))
    }
}

#[derive(Debug, Default)]
pub struct Draft {
    rounds: Vec<RoundPlan>,
    slots: HashMap<MatchRef, [Option<Seed>; 2]>,
    wins: HashMap<MatchRef, MatchRef>,
    losses: HashMap<MatchRef, MatchRef>,
}

impl Draft {
    pub fn push_round(&mut self, number: u32, round_type: RoundType, matches: u32) -> RoundPlan {
        let plan = RoundPlan {
            number,
            round_type,
            matches,
        };
        self.rounds.push(plan);
        plan
    }

    pub fn set_players(&mut self, at: MatchRef, players: [Option<Seed>; 2]) {
        self.slots.insert(at, players);
    }

    /// Empty slot `index` (0 or 1) of a match.
    pub fn clear_slot(&mut self, at: MatchRef, index: usize) {
        if let Some(slots) = self.slots.get_mut(&at) {
            slots[index] = None;
        }
    }

    pub fn players(&self, at: MatchRef) -> [Option<Seed>; 2] {
        self.slots.get(&at).copied().unwrap_or([None, None])
    }

    pub fn empty_slots(&self, at: MatchRef) -> usize {
        self.players(at).iter().filter(|s| s.is_none()).count()
    }

    pub fn link_win(&mut self, from: MatchRef, to: MatchRef) {
        trace!(%from, %to, "win advance");
        let previous = self.wins.insert(from, to);
        debug_assert!(previous.is_none(), "win advance of {from} set twice");
    }

    pub fn link_loss(&mut self, from: MatchRef, to: MatchRef) {
        trace!(%from, %to, "loss advance");
        let previous = self.losses.insert(from, to);
        debug_assert!(previous.is_none(), "loss advance of {from} set twice");
    }

    /// Materialise every match in construction order, resolving seeds to
    /// the roster entries they stand for.
    pub fn finish<P: Clone>(self, players: &[P]) -> Vec<Match<P>> {
        let resolve = |seed: Option<Seed>| seed.and_then(|s| players.get(s.index()).cloned());

        let total = self.rounds.iter().map(|r| r.matches as usize).sum();
        let mut matches = Vec::with_capacity(total);
        for plan in &self.rounds {
            for at in plan.refs() {
                let [player1, player2] = self.players(at);
                matches.push(Match {
                    round: at.round,
                    round_type: plan.round_type,
                    match_number: at.match_number,
                    player1: resolve(player1),
                    player2: resolve(player2),
                    win_advance: self.wins.get(&at).copied(),
                    loss_advance: self.losses.get(&at).copied(),
                });
            }
        }
        matches
    }
}
