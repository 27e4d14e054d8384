//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) and bot command layers and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and Discord API calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod cleanup;
pub mod oauth;
pub mod steam;

#[cfg(test)]
pub(crate) mod test;
