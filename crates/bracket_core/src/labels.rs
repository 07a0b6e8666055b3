//! Display labels for rounds ("Winner 1", "Loser 3", "Championship 1").

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::types::{Match, RoundType};

/// Label every round number present in `matches`.
///
/// Rounds are counted per round type, in the order each round number is
/// first seen while scanning the matches.
pub fn label_rounds<P>(matches: &[Match<P>]) -> BTreeMap<u32, String> {
    let mut seen: HashSet<(RoundType, u32)> = HashSet::new();
    let mut counters: HashMap<RoundType, u32> = HashMap::new();
    let mut labels = BTreeMap::new();

    for m in matches {
        if !seen.insert((m.round_type, m.round)) {
            continue;
        }
        let index = counters.entry(m.round_type).or_insert(0);
        *index += 1;
        labels.insert(m.round, format!("{} {}", m.round_type.label_prefix(), index));
    }
    labels
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
