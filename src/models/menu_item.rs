use serde::{Deserialize, Serialize};

/// A single item on a restaurant menu.
///
/// Field names on the wire are snake_case (`protein_g`, `carbs_g`, ...).
/// Macro fields are optional because catalog rows are not always complete;
/// [`MenuItem::macros`] decides whether an item can be scored at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    pub calories: Option<f64>,

    #[serde(rename = "protein_g")]
    pub protein_grams: Option<f64>,

    #[serde(rename = "carbs_g")]
    pub carbs_grams: Option<f64>,

    #[serde(rename = "fat_g")]
    pub fat_grams: Option<f64>,

    #[serde(rename = "sodium_mg", default, skip_serializing_if = "Option::is_none")]
    pub sodium_milligrams: Option<f64>,
}

/// The macros every goal profile scores on. Only exists for complete items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

impl MenuItem {
    /// Build a fully populated item with no description or sodium.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        calories: f64,
        protein_grams: f64,
        carbs_grams: f64,
        fat_grams: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: category.into(),
            calories: Some(calories),
            protein_grams: Some(protein_grams),
            carbs_grams: Some(carbs_grams),
            fat_grams: Some(fat_grams),
            sodium_milligrams: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sodium(mut self, sodium_milligrams: f64) -> Self {
        self.sodium_milligrams = Some(sodium_milligrams);
        self
    }

    /// Required macros, or `None` if any of them is missing.
    ///
    /// This is the only place that defines which fields scoring needs.
    #[inline]
    pub fn macros(&self) -> Option<Macros> {
        Some(Macros {
            calories: self.calories?,
            protein_grams: self.protein_grams?,
            carbs_grams: self.carbs_grams?,
            fat_grams: self.fat_grams?,
        })
    }

    /// Non-empty name and every reported number finite and non-negative.
    ///
    /// Missing macros are allowed here; they only make the item unscorable.
    pub fn is_valid(&self) -> bool {
        let non_negative = |v: Option<f64>| v.is_none_or(|x| x.is_finite() && x >= 0.0);

        !self.name.trim().is_empty()
            && non_negative(self.calories)
            && non_negative(self.protein_grams)
            && non_negative(self.carbs_grams)
            && non_negative(self.fat_grams)
            && non_negative(self.sodium_milligrams)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let fmt = |v: Option<f64>| v.map_or_else(|| "?".to_string(), |x| x.to_string());
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{}",
            self.name,
            self.category,
            fmt(self.calories),
            fmt(self.protein_grams),
            fmt(self.carbs_grams),
            fmt(self.fat_grams)
        )
    }
}
