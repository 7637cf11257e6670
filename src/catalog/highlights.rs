use crate::catalog::store::MenuCatalog;
use crate::engine::constants::ALL_CATEGORIES;
use crate::engine::filter::filter_by_category;
use crate::engine::ranking::rank_items;
use crate::engine::scoring::ProfileWeights;
use crate::models::{FitnessGoal, MenuItem};

/// One entry of the cross-restaurant picks carousel.
#[derive(Debug, Clone, Copy)]
pub struct Highlight<'a> {
    pub restaurant: &'a str,
    pub item: &'a MenuItem,
    pub score: f64,
}

/// Best `per_restaurant` items of every restaurant (sorted by name),
/// concatenated and capped at `limit`.
pub fn highlights<'a, C: MenuCatalog + ?Sized>(
    catalog: &'a C,
    goal: FitnessGoal,
    weights: &ProfileWeights,
    per_restaurant: usize,
    limit: usize,
) -> Vec<Highlight<'a>> {
    let mut picks = Vec::new();

    for restaurant in catalog.restaurants() {
        if picks.len() >= limit {
            break;
        }
        // restaurants() only yields known names
        let Ok(items) = catalog.lookup(restaurant) else {
            continue;
        };

        let ranked = rank_items(filter_by_category(items, ALL_CATEGORIES), goal, weights);
        picks.extend(ranked.into_iter().take(per_restaurant).map(|s| Highlight {
            restaurant,
            item: s.item,
            score: s.score,
        }));
    }

    picks.truncate(limit);
    picks
}
