//! Request-scoped helpers around the user's session.

pub mod auth;
pub mod session;
