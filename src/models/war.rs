use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::time::coc_time;

/// A clan war, either from the war log or the current-war endpoint.
///
/// War log entries only carry a subset of the fields: there is no state, the
/// timestamps other than `end_time` are absent, and member rosters are not
/// included. Those fields deserialize to `None`/defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWar {
    pub state: Option<String>,
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
    pub result: Option<String>,
    // A notInWar response carries only the state field
    #[serde(default)]
    pub clan: ClanWarTeam,
    #[serde(default)]
    pub opponent: ClanWarTeam,
}

/// One side of a clan war.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClanWarTeam {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(rename = "clanLevel", default)]
    pub clan_level: i32,
    #[serde(default)]
    pub attacks: i32,
    #[serde(default)]
    pub stars: i32,
    #[serde(rename = "destructionPercentage", default)]
    pub destruction_percentage: f32,
    #[serde(rename = "expEarned", default)]
    pub exp_earned: i32,
    #[serde(default)]
    pub members: Vec<ClanWarMember>,
}

/// A member participating in a clan war.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarMember {
    pub tag: String,
    pub name: String,
    #[serde(rename = "townhallLevel")]
    pub townhall_level: i32,
    #[serde(rename = "mapPosition")]
    pub map_position: i32,
    #[serde(default)]
    pub attacks: Vec<ClanWarAttack>,
    #[serde(rename = "opponentAttacks", default)]
    pub opponent_attacks: i32,
    #[serde(rename = "bestOpponentAttack")]
    pub best_opponent_attack: Option<ClanWarAttack>,
}

/// A single attack made during a clan war.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanWarAttack {
    pub order: i32,
    #[serde(rename = "attackerTag")]
    pub attacker_tag: String,
    #[serde(rename = "defenderTag")]
    pub defender_tag: String,
    pub stars: i32,
    #[serde(rename = "destructionPercentage")]
    pub destruction_percentage: i32,
}
