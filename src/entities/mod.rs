pub mod api;
pub mod spotify;
