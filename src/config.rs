//! Configuration management for the Spotify playlist ETL.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. Values are collected once into explicit
//! structs which are handed to the pipeline components, so the core never
//! reaches into the process environment on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{EtlError, Res, storage::BUCKET};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_PLAYLIST_LINK: &str =
    "https://open.spotify.com/playlist/71PSYf0Nrc0XgUenDY1yXo?si=053928b328a74979";
pub const DEFAULT_CATALOG_USER: &str = "spotify";

/// Returns `<data_local_dir>/spotify-etl`, falling back to the working directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-etl");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `spotify-etl/.env` below the platform-specific local data directory.
/// Variables already present in the environment are not overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotify-etl/.env`
/// - macOS: `~/Library/Application Support/spotify-etl/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-etl/.env`
///
/// # Errors
///
/// Returns a `Config` error if the directory cannot be created or an existing
/// `.env` file cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| EtlError::Config(e.to_string()))?;
    }

    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| EtlError::Config(e.to_string()))?;
    }
    Ok(())
}

fn env_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Res<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EtlError::Config(format!("{name} must be set"))),
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Credentials and endpoints for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
}

impl CatalogConfig {
    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// (required) plus the optional `SPOTIFY_API_URL` and
    /// `SPOTIFY_API_TOKEN_URL` overrides.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Res<Self> {
        Ok(Self {
            client_id: required(&lookup, "SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required(&lookup, "SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            api_url: optional(&lookup, "SPOTIFY_API_URL", DEFAULT_API_URL),
            token_url: optional(&lookup, "SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
        })
    }
}

/// Sender and recipient of the run notification email.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender: String,
    pub recipient: String,
}

impl MailConfig {
    /// Reads `SENDER_EMAIL` and `RECIPIENT_EMAIL`, both required.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Res<Self> {
        Ok(Self {
            sender: required(&lookup, "SENDER_EMAIL")?,
            recipient: required(&lookup, "RECIPIENT_EMAIL")?,
        })
    }
}

/// Location of the blob store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub root: PathBuf,
}

impl StorageConfig {
    /// Uses `SPOTIFY_ETL_STORAGE_DIR` as root when set, otherwise
    /// `<data_local_dir>/spotify-etl/storage`.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let root = lookup("SPOTIFY_ETL_STORAGE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("storage"));
        Self {
            bucket: BUCKET.to_string(),
            root,
        }
    }

    /// Where queued notification emails are written.
    pub fn outbox_dir(&self) -> PathBuf {
        self.root.join("outbox")
    }
}

/// Which playlist the extractor pulls.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub playlist_link: String,
    pub catalog_user: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            playlist_link: DEFAULT_PLAYLIST_LINK.to_string(),
            catalog_user: DEFAULT_CATALOG_USER.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Honors an optional `SPOTIFY_PLAYLIST_LINK` override.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            playlist_link: optional(&lookup, "SPOTIFY_PLAYLIST_LINK", DEFAULT_PLAYLIST_LINK),
            catalog_user: DEFAULT_CATALOG_USER.to_string(),
        }
    }
}
