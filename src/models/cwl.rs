use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::time::coc_time;
use crate::models::ClanWarTeam;

/// A reference to the clan war league a clan belongs to.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeague {
    pub id: i32,
    pub name: String,
}

/// A clan's current clan war league group.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeagueGroup {
    #[serde(default)]
    pub tag: String,
    pub state: String,
    pub season: String,
    pub clans: Vec<ClanWarLeagueClan>,
    pub rounds: Vec<ClanWarLeagueRound>,
}

/// A clan participating in a clan war league group.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeagueClan {
    pub tag: String,
    pub name: String,
    #[serde(rename = "clanLevel")]
    pub clan_level: i32,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(default)]
    pub members: Vec<ClanWarLeagueMember>,
}

/// A round of wars in a clan war league group. War tags are `#0` placeholders
/// until the round is scheduled.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeagueRound {
    #[serde(rename = "warTags")]
    pub war_tags: Vec<String>,
}

/// A member of a clan's war league roster.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeagueMember {
    pub tag: String,
    pub name: String,
    #[serde(rename = "townHallLevel")]
    pub town_hall_level: i32,
}

/// An individual war within a clan war league round.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarLeagueWar {
    pub state: String,
    #[serde(rename = "teamSize", default)]
    pub team_size: i32,
    #[serde(
        rename = "preparationStartTime",
        default,
        deserialize_with = "coc_time::option"
    )]
    pub preparation_start_time: Option<DateTime<Utc>>,
    #[serde(rename = "startTime", default, deserialize_with = "coc_time::option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "endTime", default, deserialize_with = "coc_time::option")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(
        rename = "warStartTime",
        default,
        deserialize_with = "coc_time::option"
    )]
    pub war_start_time: Option<DateTime<Utc>>,
    pub clan: ClanWarTeam,
    pub opponent: ClanWarTeam,
}
