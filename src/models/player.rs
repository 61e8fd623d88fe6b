use serde::Deserialize;

/// A single player profile.
#[derive(Debug, Deserialize, Clone)]
pub struct Player {
    pub tag: String,
    pub name: String,
    #[serde(rename = "townHallLevel")]
    pub town_hall_level: i32,
    #[serde(rename = "expLevel")]
    pub exp_level: i32,
    pub trophies: i32,
    #[serde(rename = "bestTrophies")]
    pub best_trophies: i32,
    #[serde(rename = "warStars")]
    pub war_stars: i32,
    #[serde(rename = "attackWins")]
    pub attack_wins: i32,
    #[serde(rename = "defenseWins")]
    pub defense_wins: i32,
    #[serde(rename = "builderHallLevel", default)]
    pub builder_hall_level: i32,
    #[serde(rename = "versusTrophies", default)]
    pub versus_trophies: i32,
    #[serde(rename = "bestVersusTrophies", default)]
    pub best_versus_trophies: i32,
    #[serde(rename = "versusBattleWins", default)]
    pub versus_battle_wins: i32,
    #[serde(rename = "versusBattleWinCount", default)]
    pub versus_battle_win_count: i32,
    /// Role within the clan; empty for players without a clan.
    #[serde(default)]
    pub role: String,
    pub donations: i32,
    #[serde(rename = "donationsReceived")]
    pub donations_received: i32,
    pub clan: Option<crate::models::ClanReference>,
    pub league: Option<crate::models::League>,
    #[serde(rename = "legendStatistics")]
    pub legend_statistics: Option<LegendStatistics>,
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
    #[serde(default)]
    pub labels: Vec<crate::models::Label>,
    #[serde(default)]
    pub troops: Vec<Troop>,
    #[serde(default)]
    pub heroes: Vec<Troop>,
    #[serde(default)]
    pub spells: Vec<Troop>,
}

/// A player's progress toward one achievement.
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerAchievement {
    pub name: String,
    pub stars: i32,
    pub value: i32,
    pub target: i32,
    #[serde(default)]
    pub info: String,
    #[serde(rename = "completionInfo", default)]
    pub completion_info: String,
    #[serde(default)]
    pub village: String,
}

/// A troop, hero, or spell and its upgrade level.
#[derive(Debug, Deserialize, Clone)]
pub struct Troop {
    pub name: String,
    pub level: i32,
    #[serde(rename = "maxLevel")]
    pub max_level: i32,
    #[serde(default)]
    pub village: String,
}

/// A player's position in the trophy rankings for a location.
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerRanking {
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
    pub league: Option<crate::models::League>,
}

/// A player's position in the builder base (versus) rankings for a location.
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerVersusRanking {
    pub tag: String,
    pub name: String,
    #[serde(rename = "expLevel")]
    pub exp_level: i32,
    #[serde(rename = "versusTrophies", default)]
    pub versus_trophies: i32,
    #[serde(rename = "versusBattleWins", default)]
    pub versus_battle_wins: i32,
    pub rank: i32,
    #[serde(rename = "previousRank", default)]
    pub previous_rank: i32,
    pub clan: Option<crate::models::ClanReference>,
}

/// A player's Legend League statistics.
#[derive(Debug, Deserialize, Clone)]
pub struct LegendStatistics {
    #[serde(rename = "legendTrophies", default)]
    pub legend_trophies: i32,
    #[serde(rename = "currentSeason")]
    pub current_season: Option<LegendSeason>,
    #[serde(rename = "previousSeason")]
    pub previous_season: Option<LegendSeason>,
    #[serde(rename = "bestSeason")]
    pub best_season: Option<LegendSeason>,
    #[serde(rename = "bestVersusSeason")]
    pub best_versus_season: Option<LegendSeason>,
}

/// One Legend League season result. The current season has no id or rank
/// until it closes.
#[derive(Debug, Deserialize, Clone)]
pub struct LegendSeason {
    pub id: Option<String>,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub trophies: i32,
}
