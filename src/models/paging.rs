use serde::Deserialize;

/// Cursor information returned alongside list responses. The `after` marker
/// can be fed back through `ListOptions` to fetch the next page.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}
