//! Delegated Discord OAuth credentials.
//!
//! A `Credential` is the stored access/refresh token pair of one user, a `TokenGrant`
//! is what the token endpoint hands back after a code or refresh exchange.

use std::{collections::BTreeSet, fmt};

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::server::error::oauth::ExchangeError;

/// Credentials expiring within this many seconds are refreshed before use.
pub const REFRESH_MARGIN_SECONDS: i64 = 60;

/// Set of OAuth scopes, ordered so that its string form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet(BTreeSet<String>);

impl ScopeSet {
    /// Parses a space-delimited scope string; repeated and surplus whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        raw.split_whitespace().map(str::to_string).collect()
    }

    /// Scopes present in `self` that `other` no longer contains, in sorted order.
    pub fn missing_from(&self, other: &ScopeSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.contains(scope)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Space-joined in sorted order, the format stored in `discord_oauth.scope`.
impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for scope in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(scope)?;
            first = false;
        }
        Ok(())
    }
}

/// Delegated access for one Discord user.
///
/// There is at most one credential per user. It is replaced wholesale on every
/// refresh and deleted, never marked, when it stops being usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Discord ID of the user who granted access.
    pub user_id: u64,
    pub access_token: String,
    /// Authorization scheme to send with the access token, usually `Bearer`.
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    /// Single use, consumed by the next refresh exchange.
    pub refresh_token: String,
    pub scope: ScopeSet,
}

impl Credential {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Credential)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse user_id as u64
    pub fn from_entity(entity: entity::discord_oauth::Model) -> Result<Self, DbErr> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        Ok(Self {
            user_id,
            access_token: entity.access_token,
            token_type: entity.token_type,
            expires_at: entity.expires_at,
            refresh_token: entity.refresh_token,
            scope: ScopeSet::parse(&entity.scope),
        })
    }

    /// Whether the access token is still usable for more than the refresh margin at `now`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > Duration::seconds(REFRESH_MARGIN_SECONDS)
    }
}

/// Tokens are left out so credentials can be logged.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope.to_string())
            .finish_non_exhaustive()
    }
}

/// Result of a successful code or refresh exchange.
#[derive(Clone)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the access token counted from when the exchange completed.
    pub expires_in: Duration,
    pub refresh_token: String,
    pub scope: ScopeSet,
}

impl TokenGrant {
    /// Binds the grant to a user, fixing the expiry relative to `now`.
    ///
    /// # Returns
    /// - `Ok(Credential)` - The credential to store
    /// - `Err(ExchangeError::IncompleteResponse)` - `expires_in` puts the expiry past
    ///   the representable date range
    pub fn into_credential(
        self,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Credential, ExchangeError> {
        let expires_at = now
            .checked_add_signed(self.expires_in)
            .ok_or(ExchangeError::IncompleteResponse("a representable expires_in"))?;

        Ok(Credential {
            user_id,
            access_token: self.access_token,
            token_type: self.token_type,
            expires_at,
            refresh_token: self.refresh_token,
            scope: self.scope,
        })
    }
}
