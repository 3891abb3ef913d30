//! Deterministic Selector
//!
//! Picks which entries become questions. Fully driven by the per-call
//! [`GameRng`], so a seed replays to the same selection for as long as the
//! pool content is unchanged.

use std::collections::BTreeSet;

use crate::core::rng::GameRng;
use crate::game::catalog::PoolView;
use crate::game::settings::Source;

/// Select up to `count` entry ids from the requested pools.
///
/// Candidate pools are concatenated in `Source` order (the `BTreeSet`
/// iterates in declaration order), shuffled with the call's generator, and
/// truncated. A pool smaller than `count` yields a shorter result - never
/// an error; callers that need a hard minimum check the returned length.
pub fn select_entries(
    rng: &mut GameRng,
    view: &PoolView<'_>,
    sources: &BTreeSet<Source>,
    count: usize,
) -> Vec<i64> {
    let mut candidates: Vec<i64> = sources
        .iter()
        .flat_map(|source| view.entry_ids_for(*source).iter().copied())
        .collect();

    rng.shuffle(&mut candidates);
    candidates.truncate(count);
    candidates
}

// =============================================================================
// TESTS
// =============================================================================
