// Clash of Clans API client library
// One typed async method per endpoint of the public statistics API

pub mod client;
pub mod config;
pub mod models;
pub mod options;
pub mod tag;
pub mod verbosity;

// Re-export commonly used types
pub use client::CocClient;
pub use config::CocConfig;
pub use models::{
    clan::{Clan, ClanMember},
    goldpass::GoldPass,
    paging::Paging,
    player::Player,
    war::ClanWar,
};
pub use options::{ClanSearchOptions, ListOptions};

// Constants
pub const API_BASE_URL: &str = "https://api.clashofclans.com/v1";
pub const TOKEN_FILE: &str = "COC_API_TOKEN";
