use serde::Deserialize;

/// A trophy league.
#[derive(Debug, Deserialize, Clone)]
pub struct League {
    pub id: i32,
    pub name: String,
    #[serde(rename = "iconUrls", default)]
    pub icon_urls: crate::models::IconUrls,
}

/// A league season. Season information is only available for Legend League.
#[derive(Debug, Deserialize, Clone)]
pub struct LeagueSeason {
    pub id: String,
}

/// A single player's placement in a finished league season.
#[derive(Debug, Deserialize, Clone)]
pub struct LeagueSeasonRanking {
    pub tag: String,
    pub name: String,
    #[serde(rename = "expLevel")]
    pub exp_level: i32,
    pub trophies: i32,
    #[serde(rename = "attackWins")]
    pub attack_wins: i32,
    #[serde(rename = "defenseWins")]
    pub defense_wins: i32,
    pub rank: i32,
    #[serde(rename = "previousRank", default)]
    pub previous_rank: i32,
    pub clan: Option<crate::models::ClanReference>,
    pub league: Option<League>,
}

/// A clan war league tier.
#[derive(Debug, Deserialize, Clone)]
pub struct WarLeague {
    pub id: i32,
    pub name: String,
}
