use chrono::Utc;
use reqwest::Client;

use crate::{EtlError, Res, config::CatalogConfig, types::Token};

/// Seconds before expiry at which a token is treated as expired.
const EXPIRY_MARGIN: u64 = 240;

/// Requests an app-only access token with the client-credentials grant.
///
/// Client id and secret travel as HTTP basic auth, as Spotify's token
/// endpoint expects.
///
/// # Errors
///
/// Returns [`EtlError::Auth`] when the endpoint rejects the credentials or
/// the response carries no access token, and [`EtlError::Api`] when the
/// request itself fails.
pub async fn request_token(client: &Client, config: &CatalogConfig) -> Res<Token> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(EtlError::Auth(format!("token endpoint returned {status}: {body}")));
    }

    let mut token: Token = response
        .json()
        .await
        .map_err(|e| EtlError::Auth(format!("unexpected token response: {e}")))?;
    if token.access_token.is_empty() {
        return Err(EtlError::Auth("token response without access_token".into()));
    }

    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}

pub fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now + EXPIRY_MARGIN >= token.obtained_at + token.expires_in
}
