//! Steambot: a Discord bot and web service for linking Steam accounts to Discord users.
//!
//! Both processes share one database and reach Discord on behalf of users through
//! delegated OAuth credentials managed by [`server::service::oauth`].

pub mod model;
pub mod server;
