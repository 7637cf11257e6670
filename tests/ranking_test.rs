use macrave_rs::engine::{filter_by_category, score_item, TOP_PICK_COUNT};
use macrave_rs::{
    rank_suggestions, rank_suggestions_for, FitnessGoal, MacraveError, MenuItem, ProfileWeights,
};
use proptest::prelude::*;

fn item(name: &str, category: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MenuItem {
    MenuItem::new(name, category, calories, protein, carbs, fat)
}

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_cutting_scenario() {
    // scores: A=280, B=90, C=220
    let items = vec![
        item("A", "Mains", 400.0, 30.0, 0.0, 0.0),
        item("B", "Mains", 200.0, 10.0, 0.0, 0.0),
        item("C", "Mains", 600.0, 25.0, 0.0, 0.0),
    ];
    let result = rank_suggestions(&items, FitnessGoal::Cutting, "All");

    assert_eq!(names(&result.top), ["A", "C", "B"]);
    assert!(result.runner_ups.is_empty());
}

#[test]
fn test_keto_scenario() {
    let items = vec![
        item("Cheeseburger", "Burgers", 300.0, 15.0, 33.0, 13.0), // 104 - 330 = -226
        item("Grilled Thighs", "Chicken", 450.0, 40.0, 0.0, 30.0), // 240
        item("Lettuce Wrap", "Burgers", 430.0, 25.0, 4.0, 33.0),   // 264 - 40 = 224
        item("Egg Bites", "Breakfast", 300.0, 19.0, 2.0, 20.0),    // 160 - 20 = 140
        item("Pancakes", "Breakfast", 590.0, 9.0, 101.0, 15.0),    // 120 - 1010 = -890
    ];
    let result = rank_suggestions(&items, FitnessGoal::Keto, "All");

    assert_eq!(names(&result.top), ["Grilled Thighs", "Lettuce Wrap", "Egg Bites"]);
    assert_eq!(names(&result.runner_ups), ["Cheeseburger", "Pancakes"]);
}

#[test]
fn test_bulking_prefers_protein_and_calories() {
    let items = vec![
        item("Side Salad", "Salads", 15.0, 1.0, 3.0, 0.0),
        item("Double Quarter Pounder", "Burgers", 740.0, 48.0, 43.0, 42.0),
        item("Chicken Sandwich", "Chicken", 470.0, 26.0, 45.0, 20.0),
    ];
    let result = rank_suggestions(&items, FitnessGoal::Bulking, "All");
    assert_eq!(result.top[0].name, "Double Quarter Pounder");
    assert_eq!(result.top[2].name, "Side Salad");
}

#[test]
fn test_unknown_goal_fails() {
    let items = vec![item("A", "Mains", 400.0, 30.0, 0.0, 0.0)];
    let err = rank_suggestions_for(&items, "shredding", "All", &ProfileWeights::default())
        .unwrap_err();
    assert!(matches!(err, MacraveError::InvalidGoal(ref g) if g == "shredding"));
}

#[test]
fn test_category_with_no_matches() {
    let items = vec![
        item("Burger", "Burgers", 500.0, 25.0, 40.0, 20.0),
        item("Fries", "Sides", 320.0, 4.0, 43.0, 15.0),
    ];
    let result = rank_suggestions_for(&items, "keto", "Drinks", &ProfileWeights::default()).unwrap();
    assert!(result.top.is_empty());
    assert!(result.runner_ups.is_empty());
}

#[test]
fn test_category_filter_applied_before_ranking() {
    let items = vec![
        item("Big Burger", "Burgers", 900.0, 60.0, 50.0, 50.0),
        item("Small Burger", "Burgers", 300.0, 15.0, 30.0, 12.0),
        item("Chicken Wrap", "Wraps", 350.0, 30.0, 25.0, 10.0),
    ];
    let result = rank_suggestions(&items, FitnessGoal::Cutting, "Wraps");
    assert_eq!(names(&result.top), ["Chicken Wrap"]);
    assert!(result.runner_ups.is_empty());
}

#[test]
fn test_equal_scores_ordered_by_name() {
    // cutting: 20*10 - 400*0.05 == 22*10 - 800*0.05 == 180
    let items = vec![
        item("Turkey Sub", "Subs", 400.0, 20.0, 40.0, 6.0),
        item("Ham Sub", "Subs", 800.0, 22.0, 80.0, 12.0),
    ];
    let result = rank_suggestions(&items, FitnessGoal::Cutting, "All");
    assert_eq!(names(&result.top), ["Ham Sub", "Turkey Sub"]);
}

fn arb_item() -> impl Strategy<Value = MenuItem> {
    (
        "[A-E]{1,3}",
        prop::sample::select(vec!["Burgers", "Sides", "Drinks"]),
        0u32..1500,
        0u32..60,
        0u32..120,
        0u32..80,
        any::<bool>(),
    )
        .prop_map(|(name, category, cal, p, c, f, complete)| {
            let mut item = MenuItem::new(name, category, cal as f64, p as f64, c as f64, f as f64);
            if !complete {
                item.fat_grams = None;
            }
            item
        })
}

/// Menus with unique item names.
fn arb_menu() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(arb_item(), 0..12).prop_map(|items| {
        let mut seen = std::collections::HashSet::new();
        items.into_iter().filter(|i| seen.insert(i.name.clone())).collect()
    })
}

fn arb_goal() -> impl Strategy<Value = FitnessGoal> {
    prop::sample::select(FitnessGoal::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["All", "Burgers", "Sides", "Drinks", "Desserts"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ranking_is_deterministic(items in arb_menu(), goal in arb_goal(), category in arb_category()) {
        let first = rank_suggestions(&items, goal, category);
        let second = rank_suggestions(&items, goal, category);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ranking_ignores_input_order(items in arb_menu(), goal in arb_goal(), category in arb_category()) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(
            rank_suggestions(&items, goal, category),
            rank_suggestions(&reversed, goal, category)
        );
    }

    #[test]
    fn top_is_capped_and_nothing_lost(items in arb_menu(), goal in arb_goal(), category in arb_category()) {
        let scorable = filter_by_category(&items, category)
            .into_iter()
            .filter(|i| i.macros().is_some())
            .count();
        let result = rank_suggestions(&items, goal, category);

        prop_assert_eq!(result.top.len(), scorable.min(TOP_PICK_COUNT));
        prop_assert_eq!(result.top.len() + result.runner_ups.len(), scorable);
        if category != "All" {
            prop_assert!(result.top.iter().chain(&result.runner_ups).all(|i| i.category == category));
        }
    }

    #[test]
    fn output_sorted_by_score_then_name(items in arb_menu(), goal in arb_goal()) {
        let weights = ProfileWeights::default();
        let result = rank_suggestions(&items, goal, "All");
        let ranked: Vec<&MenuItem> = result.top.iter().chain(&result.runner_ups).collect();

        for pair in ranked.windows(2) {
            let a = score_item(pair[0], goal, &weights).unwrap();
            let b = score_item(pair[1], goal, &weights).unwrap();
            prop_assert!(a > b || (a == b && pair[0].name < pair[1].name));
        }
    }

    #[test]
    fn goal_scores_move_in_their_direction(
        cal in 0.0f64..1500.0,
        p in 0.0f64..60.0,
        c in 0.0f64..120.0,
        f in 0.0f64..80.0,
        bump in 0.1f64..50.0,
    ) {
        let w = ProfileWeights::default();
        let base = item("X", "Mains", cal, p, c, f);
        let score = |goal, i: &MenuItem| score_item(i, goal, &w).unwrap();

        let more_protein = item("X", "Mains", cal, p + bump, c, f);
        let more_calories = item("X", "Mains", cal + bump, p, c, f);
        let more_carbs = item("X", "Mains", cal, p, c + bump, f);
        let more_fat = item("X", "Mains", cal, p, c, f + bump);

        prop_assert!(score(FitnessGoal::Cutting, &more_protein) >= score(FitnessGoal::Cutting, &base));
        prop_assert!(score(FitnessGoal::Cutting, &more_calories) <= score(FitnessGoal::Cutting, &base));
        prop_assert!(score(FitnessGoal::Bulking, &more_protein) >= score(FitnessGoal::Bulking, &base));
        prop_assert!(score(FitnessGoal::Bulking, &more_calories) >= score(FitnessGoal::Bulking, &base));
        prop_assert!(score(FitnessGoal::Keto, &more_fat) >= score(FitnessGoal::Keto, &base));
        prop_assert!(score(FitnessGoal::Keto, &more_carbs) <= score(FitnessGoal::Keto, &base));
    }
}
