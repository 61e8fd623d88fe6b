use serde::Deserialize;

/// A label that can be attached to a clan or player profile.
#[derive(Debug, Deserialize, Clone)]
pub struct Label {
    pub id: i32,
    pub name: String,
    #[serde(rename = "iconUrls", default)]
    pub icon_urls: crate::models::IconUrls,
}
