/// Paging options accepted by every list endpoint. Unset fields are not sent.
/// Only one of `after`/`before` should be set for a request; the markers come
/// from the `paging` property of a previous response.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Limit the number of items returned in the response
    pub limit: Option<u32>,
    /// Return only items that occur after this marker
    pub after: Option<String>,
    /// Return only items that occur before this marker
    pub before: Option<String>,
}

impl ListOptions {
    pub fn limit(limit: u32) -> Self {
        ListOptions {
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(before) = &self.before {
            query.push(("before", before.clone()));
        }
        query
    }
}

/// Filter criteria for the clan search endpoint. At least one criterion must
/// be set, and a name filter must be at least three characters long; the
/// server rejects the request otherwise.
#[derive(Debug, Clone, Default)]
pub struct ClanSearchOptions {
    /// Wild-card search on the clan name (minimum three characters)
    pub name: Option<String>,
    /// Filter by clan war frequency
    pub war_frequency: Option<String>,
    /// Filter by location identifier (see `get_locations`)
    pub location_id: Option<i32>,
    /// Comma-separated label ids to filter on
    pub label_ids: Option<String>,
    /// Filter by minimum number of clan members
    pub min_members: Option<u32>,
    /// Filter by maximum number of clan members
    pub max_members: Option<u32>,
    /// Filter by minimum amount of clan points
    pub min_clan_points: Option<u32>,
    /// Filter by minimum clan level
    pub min_clan_level: Option<u32>,
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl ClanSearchOptions {
    pub fn named(name: &str) -> Self {
        ClanSearchOptions {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(war_frequency) = &self.war_frequency {
            query.push(("warFrequency", war_frequency.clone()));
        }
        if let Some(location_id) = self.location_id {
            query.push(("locationId", location_id.to_string()));
        }
        if let Some(label_ids) = &self.label_ids {
            query.push(("labelIds", label_ids.clone()));
        }
        if let Some(min_members) = self.min_members {
            query.push(("minMembers", min_members.to_string()));
        }
        if let Some(max_members) = self.max_members {
            query.push(("maxMembers", max_members.to_string()));
        }
        if let Some(min_clan_points) = self.min_clan_points {
            query.push(("minClanPoints", min_clan_points.to_string()));
        }
        if let Some(min_clan_level) = self.min_clan_level {
            query.push(("minClanLevel", min_clan_level.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(before) = &self.before {
            query.push(("before", before.clone()));
        }
        query
    }
}
