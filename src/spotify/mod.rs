//! # Spotify Integration Module
//!
//! This module is the extractor's window onto the Spotify Web API. It
//! authenticates with the client-credentials grant and fetches playlist data
//! as untyped JSON so the raw response can be stored verbatim.
//!
//! ## Architecture
//!
//! ```text
//! Extractor
//!     ↓
//! Catalog trait
//!     ↓
//! SpotifyClient
//!     ├── Authentication (client credentials, cached token)
//!     └── Playlist Operations (user playlists, playlist tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token
//! - `GET /users/{user_id}/playlists` - playlists owned by a user
//! - `GET /playlists/{playlist_id}/tracks` - one page of a playlist's tracks
//!
//! ## Error Handling
//!
//! Non-2xx responses surface as [`crate::EtlError::Api`] and token failures
//! as [`crate::EtlError::Auth`]. Nothing is retried here; a failed run is
//! retried by whatever triggered it.

pub mod auth;
pub mod playlists;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{Res, config::CatalogConfig, types::Token};

/// Read access to the music catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn user_playlists(&self, user: &str) -> Res<Value>;

    async fn playlist_tracks(&self, playlist_id: &str) -> Res<Value>;
}

/// Spotify Web API client holding a cached client-credentials token.
pub struct SpotifyClient {
    http: Client,
    config: CatalogConfig,
    token: Mutex<Option<Token>>,
}

impl SpotifyClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            token: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns a token that is not about to expire, requesting one if needed.
    async fn access_token(&self) -> Res<String> {
        let mut cached = self.token.lock().await;
        match cached.as_ref() {
            Some(token) if !auth::is_expired(token) => Ok(token.access_token.clone()),
            _ => {
                let token = auth::request_token(&self.http, &self.config).await?;
                let access_token = token.access_token.clone();
                *cached = Some(token);
                Ok(access_token)
            }
        }
    }

    async fn get_json(&self, url: &str) -> Res<Value> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn user_playlists(&self, user: &str) -> Res<Value> {
        playlists::get_user_playlists(self, user).await
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Res<Value> {
        playlists::get_playlist_tracks(self, playlist_id).await
    }
}
