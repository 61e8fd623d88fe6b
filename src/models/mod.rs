// Models module - typed Clash of Clans API objects

pub mod capital;
pub mod clan;
pub mod cwl;
pub mod goldpass;
pub mod label;
pub mod league;
pub mod location;
pub mod paging;
pub mod player;
pub mod responses;
pub mod time;
pub mod urls;
pub mod war;

// Re-export all models for easier imports
pub use capital::*;
pub use clan::*;
pub use cwl::*;
pub use goldpass::*;
pub use label::*;
pub use league::*;
pub use location::*;
pub use paging::*;
pub use player::*;
pub use responses::*;
pub use urls::*;
pub use war::*;
