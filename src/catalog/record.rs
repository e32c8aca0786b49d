use serde::{Deserialize, Serialize};

/// A single location recommendation.
///
/// Field names on the wire follow what the web frontend expects, which is
/// why the casing is mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "recommendationId")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub venue_name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media_url: Option<String>,
    pub trend_score: f64,
    #[serde(default)]
    pub vibe_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub timestamp: String,
}

impl Recommendation {
    /// True if any of `tags` is one of this record's vibe tags.
    /// Matching is exact and case-sensitive.
    pub fn has_any_vibe<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .any(|tag| self.vibe_tags.iter().any(|v| v == tag.as_ref()))
    }
}
