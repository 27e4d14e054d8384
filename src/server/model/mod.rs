//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Snowflakes are `u64` here, the
//! database stores them as strings.

pub mod discord;
pub mod oauth;
pub mod steam;
