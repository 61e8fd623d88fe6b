use chrono::{Datelike, Timelike};
use clashofclans_cc::models::*;

/// Deserialization tests for the API payload shapes, using captured
/// response bodies. No network access required.

#[test]
fn test_clan_profile_deserializes() {
    let body = r##"{
        "tag": "#2PP",
        "name": "Lost Boys",
        "type": "inviteOnly",
        "description": "War clan, attack twice or get kicked.",
        "location": {
            "id": 32000007,
            "name": "Europe",
            "isCountry": false
        },
        "badgeUrls": {
            "small": "https://api-assets.clashofclans.com/badges/70/abc.png",
            "large": "https://api-assets.clashofclans.com/badges/512/abc.png",
            "medium": "https://api-assets.clashofclans.com/badges/200/abc.png"
        },
        "clanLevel": 15,
        "clanPoints": 34450,
        "clanVersusPoints": 31098,
        "requiredTrophies": 2200,
        "warFrequency": "always",
        "warWinStreak": 4,
        "warWins": 212,
        "warTies": 4,
        "warLosses": 96,
        "isWarLogPublic": true,
        "warLeague": {
            "id": 48000012,
            "name": "Crystal League I"
        },
        "members": 42,
        "labels": [
            {
                "id": 56000000,
                "name": "Clan Wars",
                "iconUrls": {
                    "small": "https://api-assets.clashofclans.com/labels/64/x.png",
                    "medium": "https://api-assets.clashofclans.com/labels/128/x.png"
                }
            }
        ]
    }"##;

    let clan: Clan = serde_json::from_str(body).expect("failed to parse clan");
    assert_eq!(clan.tag, "#2PP");
    assert_eq!(clan.name, "Lost Boys");
    assert_eq!(clan.clan_type, "inviteOnly");
    assert_eq!(clan.clan_level, 15);
    assert_eq!(clan.members, 42);
    assert_eq!(clan.war_wins, 212);
    assert!(clan.is_war_log_public);
    assert_eq!(clan.location.as_ref().unwrap().name, "Europe");
    assert_eq!(clan.war_league.as_ref().unwrap().name, "Crystal League I");
    assert_eq!(clan.labels.len(), 1);
    assert_eq!(clan.labels[0].name, "Clan Wars");
}

#[test]
fn test_clan_search_results_omit_optional_fields() {
    // Search results carry no description, and clans with a private war log
    // omit the war result counters.
    let body = r##"{
        "items": [
            {
                "tag": "#8QU8J9LP",
                "name": "the wardens",
                "type": "open",
                "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                "clanLevel": 9,
                "clanPoints": 20595,
                "members": 31,
                "isWarLogPublic": false
            }
        ],
        "paging": {
            "cursors": {
                "after": "eyJwb3MiOjF9"
            }
        }
    }"##;

    let response: ClanSearchResponse = serde_json::from_str(body).expect("failed to parse search");
    assert_eq!(response.items.len(), 1);
    let clan = &response.items[0];
    assert_eq!(clan.name, "the wardens");
    assert!(clan.description.is_empty());
    assert_eq!(clan.war_wins, 0);
    assert!(clan.location.is_none());
    assert_eq!(response.paging.cursors.after.as_deref(), Some("eyJwb3MiOjF9"));
    assert!(response.paging.cursors.before.is_none());
}

#[test]
fn test_clan_member_list_deserializes() {
    let body = r##"{
        "items": [
            {
                "tag": "#9Q8VL0RGC",
                "name": "WarLord",
                "role": "leader",
                "expLevel": 202,
                "league": {
                    "id": 29000022,
                    "name": "Legend League",
                    "iconUrls": {"small": "s", "tiny": "t", "medium": "m"}
                },
                "trophies": 5213,
                "versusTrophies": 3400,
                "clanRank": 1,
                "previousClanRank": 1,
                "donations": 1204,
                "donationsReceived": 306
            },
            {
                "tag": "#2LVJ8YY0",
                "name": "rookie",
                "role": "member",
                "expLevel": 64,
                "trophies": 1804,
                "clanRank": 2,
                "previousClanRank": 3,
                "donations": 0,
                "donationsReceived": 42
            }
        ],
        "paging": {"cursors": {}}
    }"##;

    let response: ClanMembersResponse = serde_json::from_str(body).expect("failed to parse members");
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].role, "leader");
    assert_eq!(response.items[0].league.as_ref().unwrap().name, "Legend League");
    assert!(response.items[1].league.is_none());
    assert_eq!(response.items[1].versus_trophies, 0);
    assert!(response.paging.cursors.after.is_none());
}

#[test]
fn test_war_log_includes_league_rounds_as_nameless_rows() {
    let body = r##"{
        "items": [
            {
                "result": "win",
                "endTime": "20230427T070000.000Z",
                "teamSize": 15,
                "clan": {
                    "tag": "#2PP",
                    "name": "Lost Boys",
                    "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                    "clanLevel": 15,
                    "attacks": 28,
                    "stars": 41,
                    "destructionPercentage": 95.73333,
                    "expEarned": 322
                },
                "opponent": {
                    "tag": "#8YG",
                    "name": "Iron Fist",
                    "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                    "clanLevel": 14,
                    "stars": 33,
                    "destructionPercentage": 84.2
                }
            },
            {
                "result": "win",
                "endTime": "20230410T101010.000Z",
                "teamSize": 30,
                "clan": {
                    "tag": "#2PP",
                    "name": "Lost Boys",
                    "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                    "clanLevel": 15,
                    "attacks": 30,
                    "stars": 71,
                    "destructionPercentage": 88.0,
                    "expEarned": 300
                },
                "opponent": {
                    "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                    "stars": 60,
                    "destructionPercentage": 80.5
                }
            }
        ],
        "paging": {"cursors": {"after": "eyJwb3MiOjJ9"}}
    }"##;

    let response: WarLogResponse = serde_json::from_str(body).expect("failed to parse war log");
    assert_eq!(response.items.len(), 2);

    let war = &response.items[0];
    assert_eq!(war.result.as_deref(), Some("win"));
    assert!(war.state.is_none(), "war log rows carry no state");
    assert!(war.preparation_start_time.is_none());
    let end_time = war.end_time.expect("end time should parse");
    assert_eq!((end_time.year(), end_time.month(), end_time.day()), (2023, 4, 27));

    // The league round row has an opponent without tag or name.
    let league_round = &response.items[1];
    assert!(league_round.opponent.name.is_empty());
    assert!(league_round.opponent.tag.is_empty());
    assert_eq!(league_round.opponent.stars, 60);
}

#[test]
fn test_current_war_with_member_roster_deserializes() {
    let body = r##"{
        "state": "inWar",
        "teamSize": 5,
        "preparationStartTime": "20230425T070000.000Z",
        "startTime": "20230426T070000.000Z",
        "endTime": "20230427T070000.000Z",
        "clan": {
            "tag": "#2PP",
            "name": "Lost Boys",
            "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
            "clanLevel": 15,
            "attacks": 7,
            "stars": 12,
            "destructionPercentage": 87.2,
            "expEarned": 0,
            "members": [
                {
                    "tag": "#9Q8VL0RGC",
                    "name": "WarLord",
                    "townhallLevel": 15,
                    "mapPosition": 1,
                    "opponentAttacks": 2,
                    "attacks": [
                        {
                            "order": 3,
                            "attackerTag": "#9Q8VL0RGC",
                            "defenderTag": "#2LVJ8YY0",
                            "stars": 3,
                            "destructionPercentage": 100
                        }
                    ],
                    "bestOpponentAttack": {
                        "order": 5,
                        "attackerTag": "#2LVJ8YY0",
                        "defenderTag": "#9Q8VL0RGC",
                        "stars": 2,
                        "destructionPercentage": 88
                    }
                }
            ]
        },
        "opponent": {
            "tag": "#8YG",
            "name": "Iron Fist",
            "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
            "clanLevel": 14,
            "attacks": 6,
            "stars": 10,
            "destructionPercentage": 79.0,
            "expEarned": 0,
            "members": []
        }
    }"##;

    let war: ClanWar = serde_json::from_str(body).expect("failed to parse current war");
    assert_eq!(war.state.as_deref(), Some("inWar"));
    assert_eq!(war.team_size, 5);
    assert!(war.preparation_start_time.unwrap() < war.start_time.unwrap());
    assert!(war.start_time.unwrap() < war.end_time.unwrap());

    let member = &war.clan.members[0];
    assert_eq!(member.map_position, 1);
    assert_eq!(member.attacks.len(), 1);
    assert_eq!(member.attacks[0].stars, 3);
    assert_eq!(member.best_opponent_attack.as_ref().unwrap().stars, 2);
}

#[test]
fn test_war_league_group_deserializes() {
    let body = r##"{
        "state": "inWar",
        "season": "2023-04",
        "clans": [
            {
                "tag": "#2PP",
                "name": "Lost Boys",
                "clanLevel": 15,
                "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                "members": [
                    {"tag": "#9Q8VL0RGC", "name": "WarLord", "townHallLevel": 15}
                ]
            }
        ],
        "rounds": [
            {"warTags": ["#8PRGQUCQY", "#8PRGQUCR2"]},
            {"warTags": ["#0", "#0"]}
        ]
    }"##;

    let group: ClanWarLeagueGroup = serde_json::from_str(body).expect("failed to parse group");
    assert_eq!(group.season, "2023-04");
    assert_eq!(group.clans[0].members[0].town_hall_level, 15);
    assert_eq!(group.rounds.len(), 2);
    assert_eq!(group.rounds[1].war_tags, vec!["#0", "#0"]);
}

#[test]
fn test_player_profile_deserializes() {
    let body = r##"{
        "tag": "#9Q8VL0RGC",
        "name": "WarLord",
        "townHallLevel": 15,
        "expLevel": 202,
        "trophies": 5213,
        "bestTrophies": 5602,
        "warStars": 1462,
        "attackWins": 140,
        "defenseWins": 12,
        "builderHallLevel": 9,
        "versusTrophies": 3400,
        "bestVersusTrophies": 3764,
        "versusBattleWins": 1042,
        "role": "leader",
        "donations": 1204,
        "donationsReceived": 306,
        "clan": {
            "tag": "#2PP",
            "name": "Lost Boys",
            "clanLevel": 15,
            "badgeUrls": {"small": "s", "large": "l", "medium": "m"}
        },
        "league": {
            "id": 29000022,
            "name": "Legend League",
            "iconUrls": {"small": "s", "tiny": "t", "medium": "m"}
        },
        "legendStatistics": {
            "legendTrophies": 2801,
            "currentSeason": {"trophies": 5213},
            "previousSeason": {"id": "2023-03", "rank": 12083, "trophies": 5344},
            "bestSeason": {"id": "2022-11", "rank": 4078, "trophies": 5602}
        },
        "achievements": [
            {
                "name": "Conqueror",
                "stars": 3,
                "value": 5213,
                "target": 3200,
                "info": "Win multiplayer battles",
                "completionInfo": "Total: 5213",
                "village": "home"
            }
        ],
        "troops": [
            {"name": "Barbarian", "level": 11, "maxLevel": 11, "village": "home"}
        ],
        "heroes": [
            {"name": "Barbarian King", "level": 86, "maxLevel": 90, "village": "home"}
        ],
        "spells": [
            {"name": "Lightning Spell", "level": 10, "maxLevel": 10, "village": "home"}
        ]
    }"##;

    let player: Player = serde_json::from_str(body).expect("failed to parse player");
    assert_eq!(player.name, "WarLord");
    assert_eq!(player.town_hall_level, 15);
    assert_eq!(player.clan.as_ref().unwrap().tag, "#2PP");
    assert_eq!(player.heroes[0].name, "Barbarian King");
    assert_eq!(player.achievements[0].stars, 3);

    let legend = player.legend_statistics.as_ref().unwrap();
    assert_eq!(legend.legend_trophies, 2801);
    // The running season has no id or rank yet.
    let current = legend.current_season.as_ref().unwrap();
    assert!(current.id.is_none());
    assert_eq!(current.rank, 0);
    assert_eq!(legend.best_season.as_ref().unwrap().rank, 4078);
}

#[test]
fn test_player_without_clan_deserializes() {
    let body = r##"{
        "tag": "#2LVJ8YY0",
        "name": "rookie",
        "townHallLevel": 8,
        "expLevel": 64,
        "trophies": 1804,
        "bestTrophies": 1900,
        "warStars": 102,
        "attackWins": 14,
        "defenseWins": 3,
        "donations": 0,
        "donationsReceived": 0
    }"##;

    let player: Player = serde_json::from_str(body).expect("failed to parse clanless player");
    assert!(player.clan.is_none());
    assert!(player.league.is_none());
    assert!(player.legend_statistics.is_none());
    assert!(player.role.is_empty());
    assert!(player.achievements.is_empty());
}

#[test]
fn test_capital_raid_season_deserializes() {
    let body = r##"{
        "items": [
            {
                "state": "ended",
                "startTime": "20230421T070000.000Z",
                "endTime": "20230424T070000.000Z",
                "capitalTotalLoot": 91450,
                "raidsCompleted": 7,
                "totalAttacks": 155,
                "enemyDistrictsDestroyed": 42,
                "offensiveReward": 117,
                "defensiveReward": 60,
                "members": [
                    {
                        "tag": "#9Q8VL0RGC",
                        "name": "WarLord",
                        "attacks": 6,
                        "attackLimit": 5,
                        "bonusAttackLimit": 1,
                        "capitalResourcesLooted": 18230
                    }
                ],
                "attackLog": [
                    {
                        "defender": {
                            "tag": "#8YG",
                            "name": "Iron Fist",
                            "level": 8,
                            "badgeUrls": {"small": "s", "large": "l", "medium": "m"}
                        },
                        "attackCount": 22,
                        "districtCount": 6,
                        "districtsDestroyed": 6,
                        "districts": [
                            {
                                "id": 70000000,
                                "name": "Capital Peak",
                                "districtHallLevel": 8,
                                "destructionPercent": 100,
                                "stars": 3,
                                "attackCount": 5,
                                "totalLooted": 12150,
                                "attacks": [
                                    {
                                        "attacker": {"tag": "#9Q8VL0RGC", "name": "WarLord"},
                                        "destructionPercent": 54,
                                        "stars": 1
                                    }
                                ]
                            }
                        ]
                    }
                ],
                "defenseLog": []
            }
        ],
        "paging": {"cursors": {"after": "eyJwb3MiOjF9"}}
    }"##;

    let response: CapitalRaidSeasonsResponse =
        serde_json::from_str(body).expect("failed to parse raid seasons");
    let season = &response.items[0];
    assert_eq!(season.state, "ended");
    assert_eq!(season.start_time.day(), 21);
    assert_eq!(season.capital_total_loot, 91450);
    assert_eq!(season.members[0].attacks, 6);

    let entry = &season.attack_log[0];
    assert_eq!(entry.defender.name, "Iron Fist");
    assert_eq!(entry.districts[0].name, "Capital Peak");
    assert_eq!(entry.districts[0].attacks[0].attacker.name, "WarLord");
    assert!(season.defense_log.is_empty());
}

#[test]
fn test_gold_pass_season_deserializes() {
    let body = r##"{
        "startTime": "20230403T080000.000Z",
        "endTime": "20230501T080000.000Z"
    }"##;

    let season: GoldPass = serde_json::from_str(body).expect("failed to parse gold pass");
    assert_eq!(season.start_time.month(), 4);
    assert_eq!(season.end_time.month(), 5);
    assert_eq!(season.start_time.hour(), 8);
    assert!(season.start_time < season.end_time);
}

#[test]
fn test_league_and_location_lists_deserialize() {
    let leagues_body = r##"{
        "items": [
            {"id": 29000000, "name": "Unranked", "iconUrls": {"small": "s", "tiny": "t"}},
            {"id": 29000022, "name": "Legend League", "iconUrls": {"small": "s", "tiny": "t", "medium": "m"}}
        ]
    }"##;
    let leagues: LeaguesResponse = serde_json::from_str(leagues_body).expect("failed to parse leagues");
    assert_eq!(leagues.items.len(), 2);
    assert_eq!(leagues.items[1].name, "Legend League");
    // No paging object at all is fine for list endpoints.
    assert!(leagues.paging.cursors.after.is_none());

    let locations_body = r##"{
        "items": [
            {"id": 32000006, "name": "International", "isCountry": false},
            {"id": 32000087, "name": "France", "isCountry": true, "countryCode": "FR"}
        ],
        "paging": {"cursors": {}}
    }"##;
    let locations: LocationsResponse =
        serde_json::from_str(locations_body).expect("failed to parse locations");
    assert!(locations.items[0].country_code.is_none());
    assert_eq!(locations.items[1].country_code.as_deref(), Some("FR"));
}

#[test]
fn test_ranking_lists_deserialize() {
    let body = r##"{
        "items": [
            {
                "tag": "#2PP",
                "name": "Lost Boys",
                "location": {"id": 32000087, "name": "France", "isCountry": true, "countryCode": "FR"},
                "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                "clanLevel": 15,
                "members": 48,
                "clanPoints": 58230,
                "rank": 1,
                "previousRank": 2
            }
        ],
        "paging": {"cursors": {}}
    }"##;
    let rankings: ClanRankingsResponse = serde_json::from_str(body).expect("failed to parse rankings");
    assert_eq!(rankings.items[0].rank, 1);
    assert_eq!(rankings.items[0].previous_rank, 2);

    let players_body = r##"{
        "items": [
            {
                "tag": "#9Q8VL0RGC",
                "name": "WarLord",
                "expLevel": 202,
                "trophies": 5213,
                "attackWins": 140,
                "defenseWins": 12,
                "rank": 1,
                "previousRank": 4,
                "clan": {"tag": "#2PP", "name": "Lost Boys"},
                "league": {"id": 29000022, "name": "Legend League", "iconUrls": {"small": "s", "tiny": "t"}}
            }
        ]
    }"##;
    let players: PlayerRankingsResponse =
        serde_json::from_str(players_body).expect("failed to parse player rankings");
    assert_eq!(players.items[0].clan.as_ref().unwrap().name, "Lost Boys");
}

#[test]
fn test_verify_token_response_deserializes() {
    let ok_body = r##"{"tag": "#9Q8VL0RGC", "token": "abcdef12", "status": "ok"}"##;
    let response: VerifyTokenResponse = serde_json::from_str(ok_body).expect("failed to parse");
    assert_eq!(response.status, "ok");

    let invalid_body = r##"{"tag": "#9Q8VL0RGC", "token": "abcdef12", "status": "invalid"}"##;
    let response: VerifyTokenResponse = serde_json::from_str(invalid_body).expect("failed to parse");
    assert_ne!(response.status, "ok");
}

#[test]
fn test_league_season_rankings_deserialize() {
    let body = r##"{
        "items": [
            {
                "tag": "#9Q8VL0RGC",
                "name": "WarLord",
                "expLevel": 202,
                "trophies": 5344,
                "attackWins": 201,
                "defenseWins": 44,
                "rank": 12083,
                "clan": {"tag": "#2PP", "name": "Lost Boys"}
            },
            {
                "tag": "#2LVJ8YY0",
                "name": "loner",
                "expLevel": 180,
                "trophies": 5201,
                "attackWins": 188,
                "defenseWins": 31,
                "rank": 12084
            }
        ],
        "paging": {"cursors": {"after": "eyJwb3MiOjEwMH0"}}
    }"##;

    let response: LeagueSeasonRankingsResponse =
        serde_json::from_str(body).expect("failed to parse season rankings");
    assert_eq!(response.items.len(), 2);
    assert!(response.items[1].clan.is_none(), "season rankings include clanless players");
}

#[test]
fn test_builder_base_ranking_lists_deserialize() {
    let clans_body = r##"{
        "items": [
            {
                "tag": "#2PP",
                "name": "Lost Boys",
                "location": {"id": 32000087, "name": "France", "isCountry": true, "countryCode": "FR"},
                "badgeUrls": {"small": "s", "large": "l", "medium": "m"},
                "clanLevel": 15,
                "members": 48,
                "clanPoints": 58230,
                "clanVersusPoints": 51742,
                "rank": 3,
                "previousRank": 3
            }
        ],
        "paging": {"cursors": {}}
    }"##;
    let clans: ClanVersusRankingsResponse =
        serde_json::from_str(clans_body).expect("failed to parse builder base clan rankings");
    assert_eq!(clans.items[0].name, "Lost Boys");
    assert_eq!(clans.items[0].clan_versus_points, 51742);
    assert_eq!(clans.items[0].rank, 3);

    let players_body = r##"{
        "items": [
            {
                "tag": "#9Q8VL0RGC",
                "name": "WarLord",
                "expLevel": 202,
                "versusTrophies": 5102,
                "versusBattleWins": 3320,
                "rank": 1,
                "previousRank": 1,
                "clan": {"tag": "#2PP", "name": "Lost Boys"}
            }
        ]
    }"##;
    let players: PlayerVersusRankingsResponse =
        serde_json::from_str(players_body).expect("failed to parse builder base player rankings");
    assert_eq!(players.items[0].versus_trophies, 5102);
}

#[test]
fn test_not_in_war_body_deserializes() {
    // The currentwar endpoint returns only the state for a clan with no war
    let body = r##"{"state": "notInWar"}"##;

    let war: ClanWar = serde_json::from_str(body).expect("failed to parse notInWar body");

    assert_eq!(war.state.as_deref(), Some("notInWar"));
    assert!(war.clan.name.is_empty());
    assert!(war.opponent.name.is_empty());
    assert!(war.end_time.is_none());
}
