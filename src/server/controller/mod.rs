//! HTTP handlers for the web process.

pub mod auth;
pub mod steam;
