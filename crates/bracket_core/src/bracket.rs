//! The finished bracket and the lookups a result recorder needs to walk it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::BracketError;
use crate::types::{Match, MatchRef, Outcome, RoundType};

/// Every match of a double-elimination bracket plus its round labels.
///
/// Serialises to `{ "matches": [...], "rounds": { "<round>": "<label>" } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bracket<P> {
    /// All matches in construction order
    pub matches: Vec<Match<P>>,
    /// Display label for every round number
    pub rounds: BTreeMap<u32, String>,
    #[serde(skip)]
    index: HashMap<MatchRef, usize>,
}

#[derive(Deserialize)]
struct BracketDocument<P> {
    matches: Vec<Match<P>>,
    rounds: BTreeMap<u32, String>,
}

impl<P> Bracket<P> {
    pub fn new(matches: Vec<Match<P>>, rounds: BTreeMap<u32, String>) -> Self {
        let index = matches
            .iter()
            .enumerate()
            .map(|(i, m)| (m.reference(), i))
            .collect();
        Self {
            matches,
            rounds,
            index,
        }
    }

    pub fn find(&self, at: MatchRef) -> Option<&Match<P>> {
        self.index.get(&at).map(|&i| &self.matches[i])
    }

    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &Match<P>> + '_ {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// Distinct round numbers of one type, in construction order.
    pub fn rounds_of(&self, round_type: RoundType) -> Vec<u32> {
        let mut rounds: Vec<u32> = Vec::new();
        for m in self.matches.iter().filter(|m| m.round_type == round_type) {
            if !rounds.contains(&m.round) {
                rounds.push(m.round);
            }
        }
        rounds
    }

    pub fn championship(&self) -> Option<&Match<P>> {
        self.matches
            .iter()
            .find(|m| m.round_type == RoundType::Championship)
    }

    /// Upstream matches whose winner or loser is sent into `target`.
    pub fn feeders(&self, target: MatchRef) -> Vec<(&Match<P>, Outcome)> {
        let mut feeders = Vec::new();
        for m in &self.matches {
            if m.win_advance == Some(target) {
                feeders.push((m, Outcome::Win));
            }
            if m.loss_advance == Some(target) {
                feeders.push((m, Outcome::Loss));
            }
        }
        feeders
    }

    pub fn label(&self, round: u32) -> Option<&str> {
        self.rounds.get(&round).map(String::as_str)
    }
}

impl<P: Serialize> Bracket<P> {
    pub fn to_json(&self, pretty: bool) -> Result<String, BracketError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(BracketError::Serialize)
    }
}

impl<P: DeserializeOwned> Bracket<P> {
    /// Read back a document produced by [`Bracket::to_json`].
    pub fn from_json(json: &str) -> Result<Self, BracketError> {
        let doc: BracketDocument<P> = serde_json::from_str(json)?;
        Ok(Self::new(doc.matches, doc.rounds))
    }
}
