//! Database repository layer.
//!
//! Repository structs handle single-table operations for each domain. They use SeaORM
//! entity models internally and return domain models from `server::model`, parsing
//! string-stored snowflakes back to `u64` at this boundary. Each operation is a single
//! statement or a short transaction so a cancelled caller never leaves partial rows.

pub mod discord;
pub mod oauth;
pub mod steam;

#[cfg(test)]
mod test;
