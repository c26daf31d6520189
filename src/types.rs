use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// Playlist track listing as returned by `GET /playlists/{id}/tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlaylist {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: String,
    pub track: RawTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub popularity: u32,
    pub external_urls: ExternalUrls,
    pub album: RawAlbum,
    pub artists: Vec<RawArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlbum {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub external_urls: ExternalUrls,
    pub artists: Vec<RawArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArtist {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

fn serialize_added_at<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&value.format("%Y-%m-%d %H:%M:%S%:z"))
}

fn serialize_release_date<S: Serializer>(value: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&value.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRecord {
    pub song_id: String,
    pub song_name: String,
    pub duration_mins: f64,
    pub url: String,
    pub popularity: u32,
    #[serde(serialize_with = "serialize_added_at")]
    pub song_added: DateTime<Utc>,
    pub album_id: String,
    pub artist_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumRecord {
    pub album_id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_release_date")]
    pub release_date: NaiveDate,
    pub total_tracks: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistRecord {
    pub artist_id: String,
    pub artist_name: String,
    pub spotify_url: String,
}

/// What a component hands back to its trigger on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatus {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl RunStatus {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

#[derive(Tabled)]
pub struct OutputTableRow {
    pub source: String,
    pub entity: String,
    pub rows: usize,
    pub key: String,
}
