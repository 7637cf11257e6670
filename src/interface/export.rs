use std::path::Path;

use crate::engine::scoring::{score_item, ProfileWeights};
use crate::error::Result;
use crate::models::{FitnessGoal, SuggestionResult};

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Write a ranking to CSV, one row per item, top picks first.
pub fn write_suggestions_csv(
    result: &SuggestionResult,
    goal: FitnessGoal,
    weights: &ProfileWeights,
    path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "tier",
        "name",
        "category",
        "score",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "sodium_mg",
    ])?;

    let tiers = result
        .top
        .iter()
        .map(|item| ("top", item))
        .chain(result.runner_ups.iter().map(|item| ("runner_up", item)));

    for (i, (tier, item)) in tiers.enumerate() {
        let score = score_item(item, goal, weights).unwrap_or_default();
        wtr.write_record([
            (i + 1).to_string(),
            tier.to_string(),
            item.name.clone(),
            item.category.clone(),
            format!("{:.2}", score),
            opt(item.calories),
            opt(item.protein_grams),
            opt(item.carbs_grams),
            opt(item.fat_grams),
            opt(item.sodium_milligrams),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
