use serde::Deserialize;

/// A clan profile. Search results omit a few fields (description, war
/// results when the war log is private), so those default when absent.
#[derive(Debug, Deserialize, Clone)]
pub struct Clan {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub clan_type: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<crate::models::Location>,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(rename = "clanLevel")]
    pub clan_level: i32,
    #[serde(rename = "clanPoints")]
    pub clan_points: i32,
    #[serde(rename = "clanVersusPoints", default)]
    pub clan_versus_points: i32,
    #[serde(rename = "requiredTrophies", default)]
    pub required_trophies: i32,
    #[serde(rename = "warFrequency", default)]
    pub war_frequency: String,
    #[serde(rename = "warWinStreak", default)]
    pub war_win_streak: i32,
    #[serde(rename = "warWins", default)]
    pub war_wins: i32,
    #[serde(rename = "warTies", default)]
    pub war_ties: i32,
    #[serde(rename = "warLosses", default)]
    pub war_losses: i32,
    #[serde(rename = "isWarLogPublic", default)]
    pub is_war_log_public: bool,
    #[serde(rename = "warLeague")]
    pub war_league: Option<crate::models::ClanWarLeague>,
    pub members: i32,
    #[serde(default)]
    pub labels: Vec<crate::models::Label>,
}

/// A member entry from a clan's member list.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "expLevel")]
    pub exp_level: i32,
    pub league: Option<crate::models::League>,
    pub trophies: i32,
    #[serde(rename = "versusTrophies", default)]
    pub versus_trophies: i32,
    #[serde(rename = "clanRank")]
    pub clan_rank: i32,
    #[serde(rename = "previousClanRank")]
    pub previous_clan_rank: i32,
    pub donations: i32,
    #[serde(rename = "donationsReceived")]
    pub donations_received: i32,
}

/// A clan's position in the trophy rankings for a location.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanRanking {
    pub tag: String,
    pub name: String,
    pub location: Option<crate::models::Location>,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(rename = "clanLevel")]
    pub clan_level: i32,
    pub members: i32,
    #[serde(rename = "clanPoints")]
    pub clan_points: i32,
    pub rank: i32,
    #[serde(rename = "previousRank")]
    pub previous_rank: i32,
}

/// A clan's position in the builder base (versus) rankings for a location.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanVersusRanking {
    pub tag: String,
    pub name: String,
    pub location: Option<crate::models::Location>,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(rename = "clanLevel")]
    pub clan_level: i32,
    pub members: i32,
    #[serde(rename = "clanPoints", default)]
    pub clan_points: i32,
    #[serde(rename = "clanVersusPoints")]
    pub clan_versus_points: i32,
    pub rank: i32,
    #[serde(rename = "previousRank", default)]
    pub previous_rank: i32,
}

/// A short reference to a clan, embedded in player and ranking payloads.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanReference {
    pub tag: String,
    pub name: String,
    #[serde(rename = "clanLevel", default)]
    pub clan_level: i32,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
}
