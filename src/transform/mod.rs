//! # Transform Module
//!
//! Normalizes one raw playlist document into three flat entity tables.
//!
//! ```text
//! RawPlaylist.items[]
//!   ├── songs()   → one SongRecord per item
//!   ├── albums()  → one AlbumRecord per item, deduplicated by album_id
//!   └── artists() → every track and album artist, deduplicated by artist_id
//! ```
//!
//! Each call works on exactly one document; deduplication never looks at
//! other documents or earlier runs.

mod dates;
mod table;

pub use dates::{parse_added_at, parse_release_date};
pub use table::{Table, to_csv};

use crate::{
    EtlError, Res,
    types::{AlbumRecord, ArtistRecord, RawArtist, RawPlaylist, SongRecord},
    utils,
};

/// Rounds to two decimal places.
///
/// Goes through the exact decimal expansion of `value`, so halves that are
/// not representable round the way the stored binary value dictates.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

pub fn duration_mins(duration_ms: u64) -> f64 {
    round2(duration_ms as f64 / 60_000.0)
}

/// One song row per playlist item, in playlist order.
///
/// The song's `artist_id` is the first artist of the track's album.
pub fn songs(doc: &RawPlaylist) -> Res<Vec<SongRecord>> {
    doc.items
        .iter()
        .map(|item| -> Res<SongRecord> {
            let track = &item.track;
            let album_artist = track.album.artists.first().ok_or_else(|| {
                EtlError::MissingField(format!("track {}: album.artists[0]", track.id))
            })?;

            Ok(SongRecord {
                song_id: track.id.clone(),
                song_name: track.name.clone(),
                duration_mins: duration_mins(track.duration_ms),
                url: track.external_urls.spotify.clone(),
                popularity: track.popularity,
                song_added: parse_added_at(&item.added_at)?,
                album_id: track.album.id.clone(),
                artist_id: album_artist.id.clone(),
            })
        })
        .collect()
}

/// Album rows, first occurrence of each `album_id` wins.
pub fn albums(doc: &RawPlaylist) -> Res<Vec<AlbumRecord>> {
    let mut albums = doc
        .items
        .iter()
        .map(|item| -> Res<AlbumRecord> {
            let album = &item.track.album;
            Ok(AlbumRecord {
                album_id: album.id.clone(),
                name: album.name.clone(),
                release_date: parse_release_date(&album.release_date)?,
                total_tracks: album.total_tracks,
                url: album.external_urls.spotify.clone(),
            })
        })
        .collect::<Res<Vec<_>>>()?;

    utils::dedup_by_key(&mut albums, |a| a.album_id.clone());
    Ok(albums)
}

fn artist_record(artist: &RawArtist) -> ArtistRecord {
    ArtistRecord {
        artist_id: artist.id.clone(),
        artist_name: artist.name.clone(),
        spotify_url: artist.external_urls.spotify.clone(),
    }
}

/// Artist rows flattened from every track, first occurrence wins.
///
/// A track's own artists come first, then its album's artists, which is
/// where every song's `artist_id` is taken from.
pub fn artists(doc: &RawPlaylist) -> Vec<ArtistRecord> {
    let mut artists: Vec<ArtistRecord> = doc
        .items
        .iter()
        .flat_map(|item| {
            item.track
                .artists
                .iter()
                .chain(item.track.album.artists.iter())
        })
        .map(artist_record)
        .collect();

    utils::dedup_by_key(&mut artists, |a| a.artist_id.clone());
    artists
}

/// The three tables derived from a single raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTables {
    pub songs: Vec<SongRecord>,
    pub albums: Vec<AlbumRecord>,
    pub artists: Vec<ArtistRecord>,
}

impl EntityTables {
    pub fn from_document(doc: &RawPlaylist) -> Res<Self> {
        Ok(Self {
            albums: albums(doc)?,
            artists: artists(doc),
            songs: songs(doc)?,
        })
    }

    pub fn songs_csv(&self) -> Res<String> {
        to_csv(&self.songs)
    }

    pub fn albums_csv(&self) -> Res<String> {
        to_csv(&self.albums)
    }

    pub fn artists_csv(&self) -> Res<String> {
        to_csv(&self.artists)
    }
}

/// Parses a raw document body, naming the blob key on failure.
pub fn parse_document(key: &str, body: &[u8]) -> Res<RawPlaylist> {
    serde_json::from_slice(body).map_err(|source| EtlError::Document {
        key: key.to_string(),
        source,
    })
}
