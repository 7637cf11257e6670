use std::collections::{BTreeMap, BTreeSet};

use strsim::jaro_winkler;

use crate::engine::constants::ALL_CATEGORIES;
use crate::error::{MacraveError, Result};
use crate::models::MenuItem;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Read-only access to restaurant menus.
pub trait MenuCatalog {
    /// Menu of a restaurant, in catalog order. Names match exactly.
    fn lookup(&self, restaurant: &str) -> Result<&[MenuItem]>;

    /// All restaurant names, sorted.
    fn restaurants(&self) -> Vec<&str>;

    /// `"All"` followed by the restaurant's distinct categories, sorted.
    fn categories(&self, restaurant: &str) -> Result<Vec<String>> {
        let items = self.lookup(restaurant)?;
        let distinct: BTreeSet<&str> = items
            .iter()
            .map(|i| i.category.as_str())
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .collect();

        let mut categories = vec![ALL_CATEGORIES.to_string()];
        categories.extend(distinct.into_iter().map(str::to_string));
        Ok(categories)
    }

    /// Find a single item by name (case-insensitive).
    fn find_item(&self, restaurant: &str, name: &str) -> Result<&MenuItem> {
        let wanted = name.trim().to_lowercase();
        self.lookup(restaurant)?
            .iter()
            .find(|i| i.name.to_lowercase() == wanted)
            .ok_or_else(|| MacraveError::ItemNotFound {
                restaurant: restaurant.to_string(),
                item: name.to_string(),
            })
    }

    /// Restaurant names resembling `query`, most similar first.
    fn closest_restaurants(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.to_lowercase();
        let mut candidates: Vec<(&str, f64)> = self
            .restaurants()
            .into_iter()
            .map(|r| (r, jaro_winkler(&r.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(r, _)| r).collect()
    }
}

/// Catalog held entirely in memory, keyed by restaurant name.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    menus: BTreeMap<String, Vec<MenuItem>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to a restaurant's menu.
    ///
    /// An item with the same name replaces the earlier one in place.
    pub fn insert(&mut self, restaurant: &str, item: MenuItem) {
        let menu = self.menus.entry(restaurant.to_string()).or_default();
        match menu.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => *existing = item,
            None => menu.push(item),
        }
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Total number of menu items across restaurants.
    pub fn item_count(&self) -> usize {
        self.menus.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, MenuItem)> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = (String, MenuItem)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (restaurant, item) in iter {
            catalog.insert(&restaurant, item);
        }
        catalog
    }
}

impl MenuCatalog for InMemoryCatalog {
    fn lookup(&self, restaurant: &str) -> Result<&[MenuItem]> {
        self.menus
            .get(restaurant)
            .map(Vec::as_slice)
            .ok_or_else(|| MacraveError::RestaurantNotFound(restaurant.to_string()))
    }

    fn restaurants(&self) -> Vec<&str> {
        self.menus.keys().map(String::as_str).collect()
    }
}
