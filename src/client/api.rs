use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::models::*;
use crate::options::{ClanSearchOptions, ListOptions};
use crate::tag::fmt_tag;
use crate::API_BASE_URL;
use crate::{v_debug, v_trace};

/// Typed client for the Clash of Clans API.
///
/// Holds a single `reqwest::Client` with the bearer token installed as a
/// default header; every endpoint method issues one GET or POST and decodes
/// the JSON body into the matching model struct.
#[derive(Clone)]
pub struct CocClient {
    client: reqwest::Client,
    base_url: String,
}

impl CocClient {
    pub fn new(token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        CocClient {
            client,
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different server, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, Box<dyn std::error::Error>> {
        v_debug!("GET {}", url);
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        v_trace!("{} {}", response.status(), url);

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("API request failed with status {}: {}", status, error_body).into());
        }

        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, Box<dyn std::error::Error>> {
        v_debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        v_trace!("{} {}", response.status(), url);

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("API request failed with status {}: {}", status, error_body).into());
        }

        Ok(response.json().await?)
    }

    fn options_query(options: Option<&ListOptions>) -> Vec<(&'static str, String)> {
        options.map(ListOptions::to_query).unwrap_or_default()
    }

    // Clan operations

    /// Retrieves a single clan by clan tag. Tags can be found with
    /// `search_clans` or the in-game clan search.
    pub async fn get_clan(&self, clan_tag: &str) -> Result<Clan, Box<dyn std::error::Error>> {
        let url = format!("{}/clans/{}", self.base_url, fmt_tag(clan_tag));
        self.get_json(&url, &[]).await
    }

    /// Searches clans by name and/or filter criteria. At least one criterion
    /// must be set in `options`.
    pub async fn search_clans(
        &self,
        options: &ClanSearchOptions,
    ) -> Result<(Vec<Clan>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/clans", self.base_url);
        let response: ClanSearchResponse = self.get_json(&url, &options.to_query()).await?;
        Ok((response.items, response.paging))
    }

    /// Lists the members of a clan.
    pub async fn get_clan_members(
        &self,
        clan_tag: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ClanMember>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/clans/{}/members", self.base_url, fmt_tag(clan_tag));
        let response: ClanMembersResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves a clan's war log. The clan's war log must be public.
    ///
    /// Entries without an opponent name (the rows the server emits for clan
    /// war league rounds) are dropped from the result.
    pub async fn get_clan_war_log(
        &self,
        clan_tag: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ClanWar>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/clans/{}/warlog", self.base_url, fmt_tag(clan_tag));
        let response: WarLogResponse = self.get_json(&url, &Self::options_query(options)).await?;
        Ok((drop_empty_wars(response.items), response.paging))
    }

    /// Retrieves information about a clan's current war.
    ///
    /// Returns an error when the clan is not currently in a war.
    pub async fn get_current_war(
        &self,
        clan_tag: &str,
    ) -> Result<ClanWar, Box<dyn std::error::Error>> {
        let url = format!("{}/clans/{}/currentwar", self.base_url, fmt_tag(clan_tag));
        let war: ClanWar = self.get_json(&url, &[]).await?;

        if war.state.as_deref() == Some("notInWar") {
            return Err("clan is not in a war".into());
        }

        Ok(war)
    }

    /// Retrieves a clan's current clan war league group.
    pub async fn get_war_league_group(
        &self,
        clan_tag: &str,
    ) -> Result<ClanWarLeagueGroup, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/clans/{}/currentwar/leaguegroup",
            self.base_url,
            fmt_tag(clan_tag)
        );
        self.get_json(&url, &[]).await
    }

    /// Retrieves an individual clan war league war by war tag. War tags come
    /// from the rounds of a league group.
    pub async fn get_war_league_war(
        &self,
        war_tag: &str,
    ) -> Result<ClanWarLeagueWar, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/clanwarleagues/wars/{}",
            self.base_url,
            fmt_tag(war_tag)
        );
        self.get_json(&url, &[]).await
    }

    /// Retrieves a clan's capital raid seasons, most recent first.
    pub async fn get_capital_raid_seasons(
        &self,
        clan_tag: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<CapitalRaidSeason>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/clans/{}/capitalraidseasons",
            self.base_url,
            fmt_tag(clan_tag)
        );
        let response: CapitalRaidSeasonsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    // Player operations

    /// Retrieves a single player by player tag. Tags can be found in game or
    /// from clan member lists.
    pub async fn get_player(&self, player_tag: &str) -> Result<Player, Box<dyn std::error::Error>> {
        let url = format!("{}/players/{}", self.base_url, fmt_tag(player_tag));
        self.get_json(&url, &[]).await
    }

    /// Verifies a player API token from the in-game settings. Returns true
    /// only when the server reports the token as valid; the token is single
    /// use, so a second verification of the same value returns false.
    pub async fn verify_player_token(
        &self,
        player_tag: &str,
        api_token: &str,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/players/{}/verifytoken",
            self.base_url,
            fmt_tag(player_tag)
        );
        let payload = serde_json::json!({ "token": api_token });
        let response: VerifyTokenResponse = self.post_json(&url, &payload).await?;
        Ok(response.status == "ok")
    }

    // League operations

    /// Lists trophy leagues.
    pub async fn get_leagues(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<League>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/leagues", self.base_url);
        let response: LeaguesResponse = self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves a single trophy league.
    pub async fn get_league(&self, league_id: i32) -> Result<League, Box<dyn std::error::Error>> {
        let url = format!("{}/leagues/{}", self.base_url, league_id);
        self.get_json(&url, &[]).await
    }

    /// Lists the seasons of a league. Season information is only available
    /// for Legend League.
    pub async fn get_league_seasons(
        &self,
        league_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<LeagueSeason>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/leagues/{}/seasons", self.base_url, league_id);
        let response: LeagueSeasonsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the player rankings for a finished league season.
    pub async fn get_league_season_rankings(
        &self,
        league_id: i32,
        season_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<LeagueSeasonRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/leagues/{}/seasons/{}",
            self.base_url, league_id, season_id
        );
        let response: LeagueSeasonRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Lists war leagues.
    pub async fn get_war_leagues(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<WarLeague>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/warleagues", self.base_url);
        let response: WarLeaguesResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves a single war league.
    pub async fn get_war_league(
        &self,
        league_id: i32,
    ) -> Result<WarLeague, Box<dyn std::error::Error>> {
        let url = format!("{}/warleagues/{}", self.base_url, league_id);
        self.get_json(&url, &[]).await
    }

    /// Lists capital leagues.
    pub async fn get_capital_leagues(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<CapitalLeague>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/capitalleagues", self.base_url);
        let response: CapitalLeaguesResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves a single capital league.
    pub async fn get_capital_league(
        &self,
        league_id: i32,
    ) -> Result<CapitalLeague, Box<dyn std::error::Error>> {
        let url = format!("{}/capitalleagues/{}", self.base_url, league_id);
        self.get_json(&url, &[]).await
    }

    // Location and ranking operations

    /// Lists locations.
    pub async fn get_locations(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Location>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/locations", self.base_url);
        let response: LocationsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves a single location.
    pub async fn get_location(
        &self,
        location_id: i32,
    ) -> Result<Location, Box<dyn std::error::Error>> {
        let url = format!("{}/locations/{}", self.base_url, location_id);
        self.get_json(&url, &[]).await
    }

    /// Retrieves the clan trophy rankings for a location.
    pub async fn get_clan_rankings(
        &self,
        location_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ClanRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/locations/{}/rankings/clans",
            self.base_url, location_id
        );
        let response: ClanRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the clan builder base rankings for a location.
    pub async fn get_clan_builder_base_rankings(
        &self,
        location_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ClanVersusRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/locations/{}/rankings/clans-builder-base",
            self.base_url, location_id
        );
        let response: ClanVersusRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the player trophy rankings for a location.
    pub async fn get_player_rankings(
        &self,
        location_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<PlayerRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/locations/{}/rankings/players",
            self.base_url, location_id
        );
        let response: PlayerRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the player builder base rankings for a location.
    pub async fn get_player_builder_base_rankings(
        &self,
        location_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<PlayerVersusRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/locations/{}/rankings/players-builder-base",
            self.base_url, location_id
        );
        let response: PlayerVersusRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the clan capital point rankings for a location.
    pub async fn get_capital_rankings(
        &self,
        location_id: i32,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<ClanCapitalRanking>, Paging), Box<dyn std::error::Error>> {
        let url = format!(
            "{}/locations/{}/rankings/capitals",
            self.base_url, location_id
        );
        let response: CapitalRankingsResponse =
            self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    // Label and season operations

    /// Lists the labels that can be attached to a clan.
    pub async fn get_clan_labels(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Label>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/labels/clans", self.base_url);
        let response: LabelsResponse = self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Lists the labels that can be attached to a player.
    pub async fn get_player_labels(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Label>, Paging), Box<dyn std::error::Error>> {
        let url = format!("{}/labels/players", self.base_url);
        let response: LabelsResponse = self.get_json(&url, &Self::options_query(options)).await?;
        Ok((response.items, response.paging))
    }

    /// Retrieves the start and end of the current Gold Pass season.
    pub async fn get_gold_pass(&self) -> Result<GoldPass, Box<dyn std::error::Error>> {
        let url = format!("{}/goldpass/seasons/current", self.base_url);
        self.get_json(&url, &[]).await
    }
}

/// Removes war log rows without an opponent name. The server emits such rows
/// for clan war league wars, and they carry no usable information.
fn drop_empty_wars(war_log: Vec<ClanWar>) -> Vec<ClanWar> {
    war_log
        .into_iter()
        .filter(|war| !war.opponent.name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn war_against(opponent_name: &str) -> ClanWar {
        let payload = serde_json::json!({
            "result": "win",
            "endTime": "20230427T070000.000Z",
            "teamSize": 15,
            "clan": {
                "tag": "#2PP",
                "name": "Lost Boys",
                "clanLevel": 12,
                "attacks": 28,
                "stars": 40,
                "destructionPercentage": 94.5,
                "expEarned": 120
            },
            "opponent": {
                "tag": "#8QQ",
                "name": opponent_name,
                "clanLevel": 11,
                "stars": 31,
                "destructionPercentage": 81.0
            }
        });
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn drops_wars_without_an_opponent_name() {
        let war_log = vec![war_against("Iron Fist"), war_against(""), war_against("Goblins")];

        let filtered = drop_empty_wars(war_log);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].opponent.name, "Iron Fist");
        assert_eq!(filtered[1].opponent.name, "Goblins");
    }

    #[test]
    fn keeps_an_all_empty_war_log_empty() {
        assert!(drop_empty_wars(Vec::new()).is_empty());
        assert!(drop_empty_wars(vec![war_against("")]).is_empty());
    }

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let client = CocClient::new("test-token".to_string())
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url, "http://localhost:8080/v1");
    }
}
