use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps a coarse category name ("Food", "Nightlife", ...) to the vibe tags
/// that imply it. Lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    map: HashMap<String, Vec<String>>,
}

impl CategoryTable {
    pub fn new(map: HashMap<String, Vec<String>>) -> Self {
        Self { map }
    }

    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Implied vibes for `category`. Unknown categories yield an empty slice.
    pub fn implied_vibes(&self, category: &str) -> &[String] {
        self.map.get(category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn insert(&mut self, category: impl Into<String>, vibes: Vec<String>) {
        self.map.insert(category.into(), vibes);
    }

    /// Category names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let entries: [(&str, &[&str]); 6] = [
            ("Food", &["Foodie", "Cozy"]),
            ("Drinks", &["Nightlife", "Trendy"]),
            ("Entertainment", &["Fun", "Energetic"]),
            ("Shopping", &["Trendy", "Upscale"]),
            ("Outdoors", &["Outdoor", "Scenic"]),
            ("Nightlife", &["Nightlife", "Energetic", "Vibrant"]),
        ];
        let map = entries
            .iter()
            .map(|(name, vibes)| {
                (
                    name.to_string(),
                    vibes.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect();
        Self { map }
    }
}
