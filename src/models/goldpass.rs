use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::time::coc_time;

/// The start and end of the current Gold Pass season.
#[derive(Debug, Deserialize, Clone)]
pub struct GoldPass {
    #[serde(rename = "startTime", deserialize_with = "coc_time::required")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime", deserialize_with = "coc_time::required")]
    pub end_time: DateTime<Utc>,
}
