use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use super::record::Recommendation;

/// A recommendation as written in a seed file. `recommendationId` and
/// `timestamp` may be left out and are filled in on load.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    #[serde(default, rename = "recommendationId")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub venue_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub social_media_url: Option<String>,
    pub trend_score: f64,
    #[serde(default)]
    pub vibe_tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

pub fn load_seed(path: &str) -> Result<Vec<Recommendation>, SeedError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SeedError::ReadError(path.to_string(), e))?;

    // YAML is a superset of JSON, so this takes either.
    let entries: Vec<SeedEntry> = serde_yaml::from_str(&content)
        .map_err(|e| SeedError::ParseError(path.to_string(), e))?;

    let records = build_records(entries)?;
    debug!("Loaded {} recommendations from {}", records.len(), path);
    Ok(records)
}

pub fn build_records(entries: Vec<SeedEntry>) -> Result<Vec<Recommendation>, SeedError> {
    let now = chrono::Utc::now().to_rfc3339();
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let id = entry.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        if !entry.trend_score.is_finite() {
            return Err(SeedError::InvalidTrendScore(id));
        }

        let timestamp = match entry.timestamp {
            Some(ts) => {
                chrono::DateTime::parse_from_rfc3339(&ts)
                    .map_err(|_| SeedError::InvalidTimestamp(id.clone(), ts.clone()))?;
                ts
            }
            None => now.clone(),
        };

        if !seen.insert(id.clone()) {
            return Err(SeedError::DuplicateId(id));
        }

        records.push(Recommendation {
            id,
            title: entry.title,
            description: entry.description,
            venue_name: entry.venue_name,
            location: entry.location,
            social_media_url: entry.social_media_url,
            trend_score: entry.trend_score,
            vibe_tags: entry.vibe_tags,
            image_url: entry.image_url,
            video_url: entry.video_url,
            timestamp,
        });
    }

    Ok(records)
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    description: &str,
    venue_name: &str,
    location: &str,
    handle: &str,
    trend_score: f64,
    vibe_tags: &[&str],
    image: &str,
    video: Option<&str>,
) -> SeedEntry {
    SeedEntry {
        id: Some(id.to_string()),
        title: title.to_string(),
        description: description.to_string(),
        venue_name: venue_name.to_string(),
        location: location.to_string(),
        social_media_url: Some(format!("https://instagram.com/{}", handle)),
        trend_score,
        vibe_tags: vibe_tags.iter().map(|s| s.to_string()).collect(),
        image_url: Some(format!(
            "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
            image
        )),
        video_url: video.map(|v| format!("https://assets.mixkit.co/videos/preview/{}", v)),
        timestamp: None,
    }
}

/// The built-in catalog used when no seed file is configured.
pub fn default_seed() -> Vec<Recommendation> {
    let entries = vec![
        entry(
            "1",
            "Hidden Speakeasy with Live Jazz",
            "A secret speakeasy with craft cocktails and live jazz performances. The dimly lit \
             atmosphere creates an intimate setting perfect for date nights or catching up with friends.",
            "The Blind Tiger",
            "123 Main St, New York, NY",
            "blindtiger",
            9.2,
            &["Cozy", "Intimate", "Trendy", "Nightlife"],
            "photo-1470337458703-46ad1756a187",
            Some("mixkit-people-dancing-at-a-nightclub-4344-large.mp4"),
        ),
        entry(
            "2",
            "Rooftop Garden Café",
            "A peaceful rooftop café with stunning city views and a lush garden setting. Perfect \
             for working remotely or enjoying a quiet afternoon with specialty coffee and pastries.",
            "Sky Garden",
            "456 Park Ave, New York, NY",
            "skygarden",
            8.7,
            &["Chill", "Outdoor", "Scenic", "Quiet"],
            "photo-1600093463592-8e36ae95ef56",
            None,
        ),
        entry(
            "3",
            "Interactive Art Exhibition",
            "A mind-bending interactive art installation where visitors become part of the exhibit. \
             Features light projections, sound design, and responsive environments.",
            "Immersive Gallery",
            "789 Broadway, New York, NY",
            "immersivegallery",
            9.5,
            &["Artsy", "Energetic", "Modern", "Unique"],
            "photo-1547826039-bfc35e0f1ea8",
            Some("mixkit-digital-animation-of-a-city-in-neon-lights-31281-large.mp4"),
        ),
        entry(
            "4",
            "Farm-to-Table Restaurant",
            "A sustainable restaurant serving seasonal dishes made with locally sourced ingredients. \
             The menu changes weekly based on what's fresh from nearby farms.",
            "Harvest Table",
            "321 River Rd, New York, NY",
            "harvesttable",
            8.9,
            &["Cozy", "Upscale", "Sustainable", "Foodie"],
            "photo-1414235077428-338989a2e8c0",
            None,
        ),
        entry(
            "5",
            "Underground Dance Club",
            "A vibrant underground club featuring electronic music from emerging DJs. Known for its \
             energetic crowd and immersive light shows that go until dawn.",
            "Pulse",
            "555 Night St, New York, NY",
            "pulseclub",
            9.0,
            &["Energetic", "Nightlife", "Trendy", "Vibrant"],
            "photo-1571204829887-3b8d69e23af5",
            Some("mixkit-dj-playing-music-in-a-disco-club-4430-large.mp4"),
        ),
        entry(
            "6",
            "Vintage Arcade Bar",
            "A nostalgic bar filled with classic arcade games from the 80s and 90s. Enjoy craft \
             beers while playing everything from Pac-Man to pinball machines.",
            "Pixel Lounge",
            "888 Retro Blvd, New York, NY",
            "pixellounge",
            8.5,
            &["Casual", "Quirky", "Nostalgic", "Fun"],
            "photo-1511882150382-421056c89033",
            None,
        ),
    ];

    // Built-in entries have unique ids and no timestamps, so this cannot fail.
    build_records(entries).unwrap_or_default()
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse seed file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Duplicate recommendation id: {0}")]
    DuplicateId(String),
    #[error("Recommendation {0} has an invalid timestamp: {1}")]
    InvalidTimestamp(String, String),
    #[error("Recommendation {0} has a non-finite trend score")]
    InvalidTrendScore(String),
}
