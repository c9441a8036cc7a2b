//! Client-credentials token exchange
//!
//! A single POST against the accounts service at startup. The token is never
//! refreshed; it lives as long as the process.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

const TOKEN_PATH: &str = "/api/token";
const GRANT_TYPE: &str = "client_credentials";

/// Bearer credential returned by the accounts service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds. The accounts service calls this `expires_in`.
    #[serde(default, alias = "expires_in")]
    pub expires: u64,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires", &self.expires)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("token request rejected with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("token response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Error body of the OAuth token endpoint.
#[derive(Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchange the configured client credentials for an access token.
pub async fn fetch_token(
    http: &reqwest::Client,
    config: &Config,
) -> Result<AccessToken, AuthError> {
    let url = format!("{}{}", config.accounts_url, TOKEN_PATH);
    crate::log_api_request!("fetch_token", url = %url, client_id = config.credentials.client_id());

    let result = request_token(http, &url, config).await;
    crate::log_api_result!("fetch_token", result);

    let token = result?;
    tracing::info!(
        token_type = %token.token_type,
        expires = token.expires,
        "Access token acquired"
    );
    Ok(token)
}

async fn request_token(
    http: &reqwest::Client,
    url: &str,
    config: &Config,
) -> Result<AccessToken, AuthError> {
    let form = [
        ("grant_type", GRANT_TYPE),
        ("client_id", config.credentials.client_id()),
        ("client_secret", config.credentials.client_secret()),
    ];

    let response = http
        .post(url)
        .form(&form)
        .send()
        .await
        .map_err(AuthError::Transport)?;

    let status = response.status();
    let body = response.text().await.map_err(AuthError::Transport)?;

    if !status.is_success() {
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            reason: rejection_reason(&body, status),
        });
    }

    decode_token(&body)
}

/// Decode the token endpoint's JSON body.
pub fn decode_token(body: &str) -> Result<AccessToken, AuthError> {
    serde_json::from_str(body).map_err(AuthError::Decode)
}

fn rejection_reason(body: &str, status: reqwest::StatusCode) -> String {
    match serde_json::from_str::<OAuthErrorBody>(body) {
        Ok(err) => err.error_description.unwrap_or(err.error),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}
