use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub id: String,
    pub preferences: Preferences,
    #[serde(default)]
    pub onboarding_complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "savedLocations")]
    pub saved_locations: Vec<String>,
}

/// A partial preferences update. Only the fields that are present replace
/// the stored ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        rename = "savedLocations",
        skip_serializing_if = "Option::is_none"
    )]
    pub saved_locations: Option<Vec<String>>,
}

impl Preferences {
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(vibes) = update.vibes {
            self.vibes = vibes;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(saved) = update.saved_locations {
            self.saved_locations = saved;
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: "user-123".to_string(),
            preferences: Preferences {
                vibes: vec![
                    "Trendy".to_string(),
                    "Outdoor".to_string(),
                    "Cozy".to_string(),
                ],
                location: "New York, NY".to_string(),
                saved_locations: vec![],
            },
            onboarding_complete: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
}

pub type UserResult<T> = Result<T, UserError>;
