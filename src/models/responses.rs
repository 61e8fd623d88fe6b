use serde::Deserialize;

// API list response wrappers. Every list endpoint returns
// {"items": [...], "paging": {...}}; single-object endpoints return the
// object itself and need no wrapper here.

#[derive(Debug, Deserialize)]
pub struct ClanSearchResponse {
    pub items: Vec<crate::models::Clan>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct ClanMembersResponse {
    pub items: Vec<crate::models::ClanMember>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct WarLogResponse {
    pub items: Vec<crate::models::ClanWar>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct LabelsResponse {
    pub items: Vec<crate::models::Label>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct LeaguesResponse {
    pub items: Vec<crate::models::League>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct LeagueSeasonsResponse {
    pub items: Vec<crate::models::LeagueSeason>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct LeagueSeasonRankingsResponse {
    pub items: Vec<crate::models::LeagueSeasonRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct WarLeaguesResponse {
    pub items: Vec<crate::models::WarLeague>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct CapitalLeaguesResponse {
    pub items: Vec<crate::models::CapitalLeague>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    pub items: Vec<crate::models::Location>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct ClanRankingsResponse {
    pub items: Vec<crate::models::ClanRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct ClanVersusRankingsResponse {
    pub items: Vec<crate::models::ClanVersusRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct PlayerRankingsResponse {
    pub items: Vec<crate::models::PlayerRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct PlayerVersusRankingsResponse {
    pub items: Vec<crate::models::PlayerVersusRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct CapitalRankingsResponse {
    pub items: Vec<crate::models::ClanCapitalRanking>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

#[derive(Debug, Deserialize)]
pub struct CapitalRaidSeasonsResponse {
    pub items: Vec<crate::models::CapitalRaidSeason>,
    #[serde(default)]
    pub paging: crate::models::Paging,
}

/// Response to the player token verification POST.
#[derive(Debug, Deserialize)]
pub struct VerifyTokenResponse {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub token: String,
    pub status: String,
}
