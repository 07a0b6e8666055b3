//! Canonical seeding order for a power-of-two bracket.
//!
//! Adjacent pairs of the returned order meet in the first full round. The
//! order guarantees seeds 1 and 2 can only meet in the final, seeds 1-4 no
//! earlier than the semifinals, and so on.

use crate::types::Seed;

/// Seeding permutation of `1..=2^exponent`.
///
/// Each level doubles the order by placing the complement
/// `2^level + 1 - a` right after every seed `a`, so `[1]` becomes
/// `[1, 2]`, then `[1, 4, 2, 3]`, then `[1, 8, 4, 5, 2, 7, 3, 6]`.
pub fn seed_order(exponent: u32) -> Vec<Seed> {
    let mut order = vec![1usize];
    for level in 1..=exponent {
        let complement = (1usize << level) + 1;
        order = order
            .into_iter()
            .flat_map(|seed| [seed, complement - seed])
            .collect();
    }
    order.into_iter().map(Seed).collect()
}

#[cfg(test)]
#[path = "seeding_tests.rs"]
mod tests;
