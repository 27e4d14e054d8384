use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::{
    data::oauth::DiscordOAuthRepository,
    error::AppError,
    service::auth::{DiscordAuthService, LOGIN_SCOPES},
};

impl<'a, E, F> DiscordAuthService<'a, E, F> {
    /// Builds the Discord consent URL and the CSRF state to remember for the callback.
    ///
    /// `prompt=none` skips the consent screen for users who already authorized the
    /// same scopes.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(LOGIN_SCOPES.map(|scope| Scope::new(scope.to_string())))
            .add_extra_param("prompt", "none")
            .url();

        (authorize_url, csrf_state)
    }

    /// Whether the user has a stored credential, in which case login can be skipped.
    pub async fn is_authorized(&self, user_id: u64) -> Result<bool, AppError> {
        let credential = DiscordOAuthRepository::new(self.db).get(user_id).await?;

        Ok(credential.is_some())
    }
}
