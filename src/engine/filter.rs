use crate::engine::constants::ALL_CATEGORIES;
use crate::models::MenuItem;

/// Keep items whose category equals `category` exactly (case-sensitive).
///
/// `"All"` keeps every item. Input order is preserved in both cases.
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    if category == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category == category).collect()
}
