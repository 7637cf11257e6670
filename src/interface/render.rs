use crate::catalog::Highlight;
use crate::engine::constants::{ALL_CATEGORIES, PROTEIN_BAR_FULL_GRAMS, PROTEIN_BAR_WIDTH};
use crate::engine::profiles::GOAL_PROFILES;
use crate::engine::scoring::{score_item, ProfileWeights};
use crate::models::{FitnessGoal, MenuItem, SuggestionResult, UserProfile};

fn grams(v: Option<f64>) -> String {
    v.map_or_else(|| "?".to_string(), |x| format!("{:.0}g", x))
}

fn kcal(v: Option<f64>) -> String {
    v.map_or_else(|| "?".to_string(), |x| format!("{:.0}", x))
}

/// One-line macro summary used by the list views.
fn item_line(item: &MenuItem, width: usize) -> String {
    format!(
        "{:<width$} {:>5} cal | P {:>4} C {:>4} F {:>4}",
        item.name,
        kcal(item.calories),
        grams(item.protein_grams),
        grams(item.carbs_grams),
        grams(item.fat_grams),
        width = width
    )
}

fn name_width<'a>(items: impl Iterator<Item = &'a MenuItem>) -> usize {
    items.map(|i| i.name.chars().count()).max().unwrap_or(10)
}

pub fn display_restaurants(restaurants: &[&str]) {
    if restaurants.is_empty() {
        println!("No restaurants in the catalog.");
        return;
    }

    println!();
    println!("=== Restaurants ({}) ===", restaurants.len());
    println!();
    for name in restaurants {
        println!("  {}", name);
    }
    println!();
}

pub fn display_menu(restaurant: &str, items: &[&MenuItem], category: &str) {
    if items.is_empty() {
        println!("No items found at {} for category '{}'.", restaurant, category);
        return;
    }

    println!();
    if category == ALL_CATEGORIES {
        println!("=== {} menu ({} items) ===", restaurant, items.len());
    } else {
        println!("=== {} menu: {} ({} items) ===", restaurant, category, items.len());
    }
    println!();

    let width = name_width(items.iter().copied());
    for item in items {
        println!("  {}  [{}]", item_line(item, width), item.category);
    }
    println!();
}

pub fn display_categories(restaurant: &str, categories: &[String]) {
    println!("Categories at {}: {}", restaurant, categories.join(", "));
}

/// Nutrition facts card for one item.
pub fn display_item_card(restaurant: &str, item: &MenuItem) {
    println!();
    println!("=== {} Nutrition Facts ({}) ===", item.name, restaurant);
    if !item.description.is_empty() {
        println!("{}", item.description);
    }
    println!();
    println!("  Calories: {}", kcal(item.calories));
    println!("  Protein:  {}", grams(item.protein_grams));
    println!("  Carbs:    {}", grams(item.carbs_grams));
    println!("  Fat:      {}", grams(item.fat_grams));
    if let Some(sodium) = item.sodium_milligrams {
        println!("  Sodium:   {:.0}mg", sodium);
    }

    if let Some(protein) = item.protein_grams {
        let ratio = (protein / PROTEIN_BAR_FULL_GRAMS).min(1.0);
        let fill = (ratio * PROTEIN_BAR_WIDTH as f64).round() as usize;
        println!();
        println!(
            "  Protein [{}{}] {:.0}g",
            "#".repeat(fill),
            "-".repeat(PROTEIN_BAR_WIDTH - fill),
            protein
        );
    }
    println!();
}

pub fn display_suggestions(
    restaurant: &str,
    goal: FitnessGoal,
    category: &str,
    result: &SuggestionResult,
    weights: &ProfileWeights,
) {
    let profile = goal.profile();
    println!();
    println!("Your fitness goal is: {} {}", profile.label, profile.icon);
    if category != ALL_CATEGORIES {
        println!("Filtering {} for {} items.", restaurant, category);
    }

    if result.is_empty() {
        println!("No top suggestions found for this criteria.");
        return;
    }

    let width = name_width(result.top.iter().chain(&result.runner_ups));
    let print_ranked = |start: usize, items: &[MenuItem]| {
        for (i, item) in items.iter().enumerate() {
            let score = score_item(item, goal, weights).unwrap_or_default();
            println!("{:>3}. {}  score {:>8.2}", start + i + 1, item_line(item, width), score);
        }
    };

    println!();
    println!("=== Top {} at {} ===", result.top.len(), restaurant);
    print_ranked(0, &result.top);

    if !result.runner_ups.is_empty() {
        println!();
        println!("--- Runner-ups ---");
        print_ranked(result.top.len(), &result.runner_ups);
    }
    println!();
}

pub fn display_highlights(goal: FitnessGoal, picks: &[Highlight]) {
    let profile = goal.profile();
    if picks.is_empty() {
        println!("No picks available for {}.", profile.label);
        return;
    }

    println!();
    println!("=== Top picks for {} {} ===", profile.label, profile.icon);
    println!();

    let width = picks.iter().map(|h| h.restaurant.chars().count()).max().unwrap_or(10);
    for pick in picks {
        println!(
            "  {:<width$}  {}  ({:.1})",
            pick.restaurant,
            pick.item.name,
            pick.score,
            width = width
        );
    }
    println!();
}

pub fn display_goals() {
    println!();
    for profile in &GOAL_PROFILES {
        println!("  {} {:<8} {}", profile.icon, profile.goal.as_str(), profile.description);
    }
    println!();
}

pub fn display_user(user: &UserProfile) {
    let profile = user.fitness_goal.profile();
    println!("Welcome, {}! ({})", user.name, user.username);
    println!("Goal: {} {}", profile.label, profile.icon);
    if let Some(age) = user.age {
        println!("Age: {}", age);
    }
    if let Some(weight) = user.weight {
        println!("Weight: {} lbs", weight);
    }
    println!("Member since: {}", user.created_at.format("%Y-%m-%d"));
}
