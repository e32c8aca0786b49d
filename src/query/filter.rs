use serde::{Deserialize, Serialize};

use super::category::CategoryTable;
use crate::catalog::Recommendation;

/// The combined vibe/category/distance query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default, rename = "distance")]
    pub max_distance: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FilterSpec {
    pub fn with_vibes<S: Into<String>>(mut self, vibes: impl IntoIterator<Item = S>) -> Self {
        self.vibes = vibes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance = Some(miles);
        self
    }
}

/// Keep records sharing at least one tag with `vibes`.
/// An empty `vibes` keeps everything.
pub fn apply_vibe_filter<'a>(
    items: Vec<&'a Recommendation>,
    vibes: &[String],
) -> Vec<&'a Recommendation> {
    if vibes.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.has_any_vibe(vibes))
        .collect()
}

/// Narrow by the vibes a category implies. A missing category, or one the
/// table knows nothing about, keeps everything.
pub fn apply_category_filter<'a>(
    items: Vec<&'a Recommendation>,
    category: Option<&str>,
    table: &CategoryTable,
) -> Vec<&'a Recommendation> {
    let implied = match category {
        Some(category) => table.implied_vibes(category),
        None => return items,
    };
    if implied.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.has_any_vibe(implied))
        .collect()
}
