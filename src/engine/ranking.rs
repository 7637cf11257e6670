use std::cmp::Ordering;

use tracing::debug;

use crate::engine::constants::TOP_PICK_COUNT;
use crate::engine::filter::filter_by_category;
use crate::engine::scoring::{score_item, ProfileWeights};
use crate::error::Result;
use crate::models::{FitnessGoal, MenuItem, SuggestionResult};

/// A menu item with its score under one goal.
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
    pub item: &'a MenuItem,
    pub score: f64,
}

/// Best first; equal scores fall back to ascending name.
fn compare_scored(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(Ordering::Equal) | None => a.item.name.cmp(&b.item.name),
        Some(ord) => ord,
    }
}

/// Score and sort items under a goal.
///
/// Items missing a required macro are dropped rather than scored as zero.
pub fn rank_items<'a, I>(
    items: I,
    goal: FitnessGoal,
    weights: &ProfileWeights,
) -> Vec<ScoredItem<'a>>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut scored: Vec<ScoredItem<'a>> = items
        .into_iter()
        .filter_map(|item| {
            score_item(item, goal, weights).map(|score| ScoredItem { item, score })
        })
        .collect();

    scored.sort_by(compare_scored);
    scored
}

/// Rank a menu for a goal using the reference weights.
///
/// Filters by category first ("All" keeps everything), then scores, sorts
/// and splits into at most three top picks plus every remaining runner-up.
/// An empty menu or a filter with no matches gives an empty result.
pub fn rank_suggestions(items: &[MenuItem], goal: FitnessGoal, category: &str) -> SuggestionResult {
    rank_suggestions_with(items, goal, category, &ProfileWeights::default())
}

/// Same as [`rank_suggestions`] with explicit weights.
pub fn rank_suggestions_with(
    items: &[MenuItem],
    goal: FitnessGoal,
    category: &str,
    weights: &ProfileWeights,
) -> SuggestionResult {
    let filtered = filter_by_category(items, category);
    if filtered.is_empty() {
        debug!(category, "no items left after category filter");
        return SuggestionResult::default();
    }

    let ranked = rank_items(filtered, goal, weights);
    debug!(%goal, category, scorable = ranked.len(), "ranked menu items");

    let split = ranked.len().min(TOP_PICK_COUNT);
    let mut owned = ranked.into_iter().map(|s| s.item.clone());

    SuggestionResult {
        top: owned.by_ref().take(split).collect(),
        runner_ups: owned.collect(),
    }
}

/// Parse the goal, then rank. Fails with `InvalidGoal` before any work.
pub fn rank_suggestions_for(
    items: &[MenuItem],
    goal: &str,
    category: &str,
    weights: &ProfileWeights,
) -> Result<SuggestionResult> {
    let goal: FitnessGoal = goal.parse()?;
    Ok(rank_suggestions_with(items, goal, category, weights))
}
