use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    platform::PlatformError,
    types::{Token, TokenResponse},
};

/// Seconds before expiry at which a token is considered stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Holds the app token obtained through the client-credentials grant.
///
/// The token is fetched lazily and refreshed transparently once it is
/// within four minutes of expiry. Concurrent requests share one token; the
/// mutex makes sure only one of them performs the refresh.
pub struct TokenManager {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(http: Client, token_url: String, client_id: String, client_secret: String) -> Self {
        TokenManager {
            http,
            token_url,
            client_id,
            client_secret,
            token: Mutex::new(None),
        }
    }

    /// Returns a valid access token, requesting a new one when needed.
    pub async fn get_valid_token(&self) -> Result<String, PlatformError> {
        let mut guard = self.token.lock().await;

        if let Some(token) = guard.as_ref() {
            if !is_expired(token, Utc::now().timestamp() as u64) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *guard = Some(token);

        Ok(access_token)
    }

    async fn request_token(&self) -> Result<Token, PlatformError> {
        let res = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?
            .error_for_status()?;

        let body: TokenResponse = res.json().await?;
        if !body.token_type.eq_ignore_ascii_case("bearer") {
            return Err(PlatformError::Auth(format!(
                "unexpected token type {}",
                body.token_type
            )));
        }

        tracing::debug!(expires_in = body.expires_in, "obtained client-credentials token");

        Ok(Token {
            access_token: body.access_token,
            expires_in: body.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

pub fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}
