// Client module - HTTP transport and typed API surface

pub mod api;

pub use api::CocClient;
