use serde::Serialize;

use crate::models::MenuItem;

/// Ranked suggestions for one request. Built fresh per call, never stored.
///
/// Serializes as `{ "suggestions": [...], "runner_ups": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionResult {
    /// Best-scoring items, at most three, best first.
    #[serde(rename = "suggestions")]
    pub top: Vec<MenuItem>,

    /// Every other scorable item, best first.
    pub runner_ups: Vec<MenuItem>,
}

impl SuggestionResult {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.runner_ups.is_empty()
    }

    /// Number of items that were ranked.
    pub fn len(&self) -> usize {
        self.top.len() + self.runner_ups.len()
    }
}

/// Menu listing as served to clients: `{ "items": [...] }`.
#[derive(Debug, Serialize)]
pub struct MenuResponse<'a> {
    pub items: &'a [MenuItem],
}
