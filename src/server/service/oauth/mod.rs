//! Delegated Discord OAuth token lifecycle.
//!
//! `TokenService` is the single entry point the bot and the web service use to act on
//! behalf of a user. Its operations are split across submodules:
//!
//! - `refresh` - `ensure_fresh`, reuse or rotate a credential
//! - `acquire` - `acquire` / `with_client`, hand out a client bound to a fresh token
//! - `invalidate` - `invalidate` / `disconnect`, delete a credential
//!
//! Network access goes through two seams, `TokenExchange` for the token endpoint and
//! `DelegatedClientFactory` for API calls, so both can be replaced in tests.
//!
//! Both processes share only the database. Nothing here caches a credential: every
//! acquisition reads the store, so a deletion made by one process is observed by the
//! other on its next call.

use sea_orm::DatabaseConnection;

pub mod acquire;
pub mod client;
pub mod exchange;
pub mod invalidate;
pub mod lock;
pub mod refresh;

use lock::RefreshLocks;

/// Token lifecycle operations over a credential store.
///
/// # Type Parameters
/// - `E` - Token endpoint used for refresh and revocation exchanges
/// - `F` - Factory producing API clients bound to an access token
pub struct TokenService<'a, E, F> {
    pub db: &'a DatabaseConnection,
    pub exchange: &'a E,
    pub client_factory: &'a F,
    pub refresh_locks: &'a RefreshLocks,
}

impl<'a, E, F> TokenService<'a, E, F> {
    pub fn new(
        db: &'a DatabaseConnection,
        exchange: &'a E,
        client_factory: &'a F,
        refresh_locks: &'a RefreshLocks,
    ) -> Self {
        Self {
            db,
            exchange,
            client_factory,
            refresh_locks,
        }
    }
}
