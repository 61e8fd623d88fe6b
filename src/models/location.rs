use serde::Deserialize;

/// A location (country or region) used for rankings.
#[derive(Debug, Deserialize, Clone)]
pub struct Location {
    pub id: i32,
    pub name: String,
    #[serde(rename = "isCountry")]
    pub is_country: bool,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "localizedName")]
    pub localized_name: Option<String>,
}
