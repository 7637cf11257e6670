/// Category filter value that keeps every item.
pub const ALL_CATEGORIES: &str = "All";

/// Number of items returned as top picks.
pub const TOP_PICK_COUNT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Reference scoring weights (score = Σ macro × weight)
// ─────────────────────────────────────────────────────────────────────────────

/// Cutting: protein dominates at typical fast-food magnitudes.
pub const CUTTING_PROTEIN_WEIGHT: f64 = 10.0;
pub const CUTTING_CALORIE_WEIGHT: f64 = -0.05;

/// Bulking: protein and calories both count.
pub const BULKING_PROTEIN_WEIGHT: f64 = 6.0;
pub const BULKING_CALORIE_WEIGHT: f64 = 0.1;

/// Keto: fat rewarded, carbs punished harder.
pub const KETO_FAT_WEIGHT: f64 = 8.0;
pub const KETO_CARB_WEIGHT: f64 = -10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Highlights
// ─────────────────────────────────────────────────────────────────────────────

/// Items taken from each restaurant for the cross-restaurant carousel.
pub const HIGHLIGHTS_PER_RESTAURANT: usize = 2;

/// Total carousel size.
pub const HIGHLIGHTS_LIMIT: usize = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Protein amount that fills the protein bar on the nutrition card.
pub const PROTEIN_BAR_FULL_GRAMS: f64 = 50.0;

/// Width of the protein bar in characters.
pub const PROTEIN_BAR_WIDTH: usize = 20;
