//! Server-side implementation shared by the bot and web processes.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, including the delegated OAuth token
//!   lifecycle in `service::oauth`
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Type-safe session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared dependencies (DB, HTTP clients, OAuth client, refresh locks)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration for the web process
//! - **Scheduler** (`scheduler/`) - Cron jobs run by the bot process
//! - **Bot** (`bot/`) - Discord event handlers and slash commands
//!
//! The bot and web processes never share memory. Everything they must agree on,
//! most importantly the stored credentials, lives in the database.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
