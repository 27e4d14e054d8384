//! Data transfer objects returned by the web API.

pub mod api;
pub mod discord;
pub mod steam;
pub mod user;
