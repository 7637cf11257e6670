use std::io::Write;

use macrave_rs::catalog::{highlights, load_catalog, MenuCatalog};
use macrave_rs::config::load_weights;
use macrave_rs::models::{FitnessGoal, NewUser};
use macrave_rs::session::{self, JsonFileSessionStore, SessionRepository};
use macrave_rs::{rank_suggestions_for, rank_suggestions_with, MacraveError, ProfileWeights};
use tempfile::{NamedTempFile, TempDir};

const CATALOG: &str = r#"[
    {"restaurant": "Chick-fil-A", "item": "Grilled Nuggets 12ct", "category": "Entrees", "kcal": 200, "protein_g": 38, "carbs_g": 2, "fat_g": 4.5, "sodium_mg": 660},
    {"restaurant": "Chick-fil-A", "item": "Chicken Sandwich", "category": "Entrees", "kcal": 420, "protein_g": 29, "carbs_g": 41, "fat_g": 18, "sodium_mg": 1460},
    {"restaurant": "Chick-fil-A", "item": "Spicy Deluxe", "category": "Entrees", "kcal": 550, "protein_g": 33, "carbs_g": 45, "fat_g": 26},
    {"restaurant": "Chick-fil-A", "item": "Waffle Fries (M)", "category": "Sides", "kcal": 420, "protein_g": 5, "carbs_g": 45, "fat_g": 24},
    {"restaurant": "Chick-fil-A", "item": "Cobb Salad", "category": "Salads", "kcal": 830, "protein_g": 42, "carbs_g": 29, "fat_g": 62},
    {"restaurant": "Chick-fil-A", "item": "Lemonade", "category": "Drinks", "kcal": 220, "protein_g": 0, "carbs_g": 58, "fat_g": 0},
    {"restaurant": "Chick-fil-A", "item": "Secret Menu Item", "category": "Entrees", "kcal": 500},
    {"restaurant": "Taco Bell", "item": "Power Bowl", "category": "Bowls", "kcal": 460, "protein_g": 26, "carbs_g": 43, "fat_g": 21},
    {"restaurant": "Taco Bell", "item": "Crunchy Taco", "category": "Tacos", "kcal": 170, "protein_g": 8, "carbs_g": 13, "fat_g": 9}
]"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

#[test]
fn test_suggestions_from_catalog_file() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    let items = catalog.lookup("Chick-fil-A").unwrap();

    let result = rank_suggestions_for(items, "cutting", "All", &ProfileWeights::default()).unwrap();

    // cutting: nuggets 370, cobb 378.5, sandwich 269, spicy 302.5, fries 29, lemonade -11
    let top: Vec<&str> = result.top.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(top, ["Cobb Salad", "Grilled Nuggets 12ct", "Spicy Deluxe"]);
    let runner_ups: Vec<&str> = result.runner_ups.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(runner_ups, ["Chicken Sandwich", "Waffle Fries (M)", "Lemonade"]);
}

#[test]
fn test_item_missing_macros_not_ranked() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    let items = catalog.lookup("Chick-fil-A").unwrap();
    assert_eq!(items.len(), 7);

    let result = rank_suggestions_with(items, FitnessGoal::Bulking, "Entrees", &ProfileWeights::default());
    assert_eq!(result.len(), 3);
    assert!(result
        .top
        .iter()
        .chain(&result.runner_ups)
        .all(|i| i.name != "Secret Menu Item"));
}

#[test]
fn test_suggestion_wire_shape() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    let items = catalog.lookup("Taco Bell").unwrap();

    let result = rank_suggestions_with(items, FitnessGoal::Keto, "All", &ProfileWeights::default());
    let json = serde_json::to_value(&result).unwrap();

    let first = &json["suggestions"][0];
    assert_eq!(first["name"], "Crunchy Taco");
    assert_eq!(first["calories"], 170.0);
    assert_eq!(first["protein_g"], 8.0);
    assert!(first.get("sodium_mg").is_none());
    assert!(json["runner_ups"].as_array().unwrap().is_empty());
}

#[test]
fn test_unknown_restaurant() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    assert!(matches!(
        catalog.lookup("taco bell"),
        Err(MacraveError::RestaurantNotFound(_))
    ));
    assert_eq!(catalog.closest_restaurants("taco bel", 5).first(), Some(&"Taco Bell"));
}

#[test]
fn test_highlights_across_restaurants() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    let picks = highlights(&catalog, FitnessGoal::Cutting, &ProfileWeights::default(), 2, 12);

    let summary: Vec<(&str, &str)> = picks.iter().map(|h| (h.restaurant, h.item.name.as_str())).collect();
    assert_eq!(
        summary,
        [
            ("Chick-fil-A", "Cobb Salad"),
            ("Chick-fil-A", "Grilled Nuggets 12ct"),
            ("Taco Bell", "Power Bowl"),
            ("Taco Bell", "Crunchy Taco"),
        ]
    );
}

#[test]
fn test_weights_file_changes_ranking() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();
    let items = catalog.lookup("Chick-fil-A").unwrap();

    // Make calories count much more than the reference weights do
    let mut weights_file = NamedTempFile::new().unwrap();
    weights_file
        .write_all(br#"{"cutting": {"protein": 10.0, "calories": -1.0}}"#)
        .unwrap();
    let weights = load_weights(weights_file.path()).unwrap();

    let result = rank_suggestions_with(items, FitnessGoal::Cutting, "All", &weights);
    assert_eq!(result.top[0].name, "Grilled Nuggets 12ct");
}

#[test]
fn test_account_flow_with_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut store = JsonFileSessionStore::open(&path).unwrap();
    session::register(
        &mut store,
        NewUser {
            name: "Morgan".to_string(),
            username: "morgan".to_string(),
            password: "tacos4life".to_string(),
            confirm_password: "tacos4life".to_string(),
            fitness_goal: FitnessGoal::Cutting,
            age: Some(29),
            weight: Some(170),
        },
    )
    .unwrap();
    session::logout(&mut store).unwrap();

    let mut store = JsonFileSessionStore::open(&path).unwrap();
    assert!(store.current().unwrap().is_none());
    session::login(&mut store, "morgan", "tacos4life").unwrap();
    session::update_goal(&mut store, FitnessGoal::Keto).unwrap();

    let store = JsonFileSessionStore::open(&path).unwrap();
    let user = session::require_current(&store).unwrap();
    assert_eq!(user.fitness_goal, FitnessGoal::Keto);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("tacos4life"));
}
