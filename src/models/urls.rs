use serde::Deserialize;

/// Badge image URLs for a clan.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BadgeUrls {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub large: String,
}

/// Icon image URLs for a league or label.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IconUrls {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub tiny: String,
}
