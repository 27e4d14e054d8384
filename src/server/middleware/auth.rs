use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guards routes that act on behalf of the logged in user.
///
/// Only checks the session. Whether the user still holds a usable Discord
/// credential is decided by the token lifecycle when a delegated call is made.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the Discord ID of the logged in user.
    ///
    /// # Returns
    /// - `Ok(u64)` - The user's Discord ID
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    pub async fn require(&self) -> Result<u64, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        Ok(user_id)
    }
}
