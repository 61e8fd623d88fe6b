use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::time::coc_time;

/// A clan capital league tier.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalLeague {
    pub id: i32,
    pub name: String,
}

/// A clan's position in the capital point rankings for a location.
#[derive(Debug, Deserialize, Clone)]
pub struct ClanCapitalRanking {
    pub tag: String,
    pub name: String,
    pub location: Option<crate::models::Location>,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
    #[serde(rename = "clanLevel")]
    pub clan_level: i32,
    pub members: i32,
    pub rank: i32,
    #[serde(rename = "previousRank", default)]
    pub previous_rank: i32,
    #[serde(rename = "clanCapitalPoints")]
    pub clan_capital_points: i32,
}

/// One raid weekend for a clan, with the full attack and defense logs.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidSeason {
    pub state: String,
    #[serde(rename = "startTime", deserialize_with = "coc_time::required")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime", deserialize_with = "coc_time::required")]
    pub end_time: DateTime<Utc>,
    #[serde(rename = "capitalTotalLoot")]
    pub capital_total_loot: i32,
    #[serde(rename = "raidsCompleted")]
    pub raids_completed: i32,
    #[serde(rename = "totalAttacks")]
    pub total_attacks: i32,
    #[serde(rename = "enemyDistrictsDestroyed")]
    pub enemy_districts_destroyed: i32,
    #[serde(rename = "offensiveReward")]
    pub offensive_reward: i32,
    #[serde(rename = "defensiveReward")]
    pub defensive_reward: i32,
    #[serde(default)]
    pub members: Vec<CapitalRaidMember>,
    #[serde(rename = "attackLog", default)]
    pub attack_log: Vec<CapitalRaidAttackLogEntry>,
    #[serde(rename = "defenseLog", default)]
    pub defense_log: Vec<CapitalRaidDefenseLogEntry>,
}

/// One enemy capital the clan raided during a raid weekend.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidAttackLogEntry {
    pub defender: CapitalRaidClan,
    #[serde(rename = "attackCount")]
    pub attack_count: i32,
    #[serde(rename = "districtCount")]
    pub district_count: i32,
    #[serde(rename = "districtsDestroyed")]
    pub districts_destroyed: i32,
    #[serde(default)]
    pub districts: Vec<CapitalRaidDistrict>,
}

/// One raid made against the clan's own capital during a raid weekend.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidDefenseLogEntry {
    pub attacker: CapitalRaidClan,
    #[serde(rename = "attackCount")]
    pub attack_count: i32,
    #[serde(rename = "districtCount")]
    pub district_count: i32,
    #[serde(rename = "districtsDestroyed")]
    pub districts_destroyed: i32,
    #[serde(default)]
    pub districts: Vec<CapitalRaidDistrict>,
}

/// The opposing clan in a raid log entry.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(rename = "badgeUrls", default)]
    pub badge_urls: crate::models::BadgeUrls,
}

/// A capital district and the attacks made against it.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidDistrict {
    pub id: i32,
    pub name: String,
    #[serde(rename = "districtHallLevel")]
    pub district_hall_level: i32,
    #[serde(rename = "destructionPercent")]
    pub destruction_percent: i32,
    pub stars: i32,
    #[serde(rename = "attackCount")]
    pub attack_count: i32,
    #[serde(rename = "totalLooted")]
    pub total_looted: i32,
    #[serde(default)]
    pub attacks: Vec<CapitalRaidAttack>,
}

/// A single attack on a capital district.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidAttack {
    pub attacker: CapitalRaidAttacker,
    #[serde(rename = "destructionPercent")]
    pub destruction_percent: i32,
    pub stars: i32,
}

/// The player who made an attack on a capital district.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidAttacker {
    pub tag: String,
    pub name: String,
}

/// A clan member's totals for a raid weekend.
#[derive(Debug, Deserialize, Clone)]
pub struct CapitalRaidMember {
    pub tag: String,
    pub name: String,
    pub attacks: i32,
    #[serde(rename = "attackLimit")]
    pub attack_limit: i32,
    #[serde(rename = "bonusAttackLimit")]
    pub bonus_attack_limit: i32,
    #[serde(rename = "capitalResourcesLooted")]
    pub capital_resources_looted: i32,
}
