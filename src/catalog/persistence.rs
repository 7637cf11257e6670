use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::store::InMemoryCatalog;
use crate::error::Result;
use crate::models::MenuItem;

/// One row of the flat catalog file: a menu item tagged with its restaurant.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    restaurant: String,

    #[serde(alias = "item", default)]
    name: String,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    category: Option<String>,

    #[serde(alias = "kcal", default)]
    calories: Option<f64>,

    #[serde(alias = "protein", default)]
    protein_g: Option<f64>,

    #[serde(alias = "carbs", default)]
    carbs_g: Option<f64>,

    #[serde(alias = "fat", default)]
    fat_g: Option<f64>,

    #[serde(alias = "sodium", default)]
    sodium_mg: Option<f64>,

    #[serde(default)]
    serving_size: Option<String>,
}

impl CatalogRow {
    /// Normalize into `(restaurant, item)`, or `None` if the row is unusable.
    fn into_entry(self) -> Option<(String, MenuItem)> {
        let restaurant = self.restaurant.trim().to_string();
        let name = self.name.trim().to_string();
        if restaurant.is_empty() || name.is_empty() {
            warn!(%restaurant, %name, "skipping catalog row without restaurant or name");
            return None;
        }

        let category = self.category.unwrap_or_default().trim().to_string();
        let description = match self.description.filter(|d| !d.trim().is_empty()) {
            Some(d) => d,
            None => match self.serving_size.filter(|s| !s.trim().is_empty()) {
                Some(size) => format!("{} · {}", category, size.trim()),
                None => category.clone(),
            },
        };

        let item = MenuItem {
            name,
            description,
            category,
            calories: self.calories,
            protein_grams: self.protein_g,
            carbs_grams: self.carbs_g,
            fat_grams: self.fat_g,
            sodium_milligrams: self.sodium_mg,
        };

        if !item.is_valid() {
            warn!(
                %restaurant,
                item = %item.debug_string(),
                "skipping catalog row with invalid nutrition values"
            );
            return None;
        }

        Some((restaurant, item))
    }
}

fn read_rows(path: &Path) -> Result<Vec<CatalogRow>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader.deserialize().collect::<std::result::Result<Vec<CatalogRow>, _>>()?;
        Ok(rows)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Load a catalog from a JSON or CSV file of flat rows.
///
/// Rows are grouped by restaurant in file order. Within a restaurant the
/// last row with a given name wins.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    let rows = read_rows(path)?;
    let row_count = rows.len();

    let catalog: InMemoryCatalog = rows.into_iter().filter_map(CatalogRow::into_entry).collect();

    info!(
        path = %path.display(),
        rows = row_count,
        restaurants = catalog.len(),
        items = catalog.item_count(),
        "loaded menu catalog"
    );
    Ok(catalog)
}
