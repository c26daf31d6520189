use serde::Serialize;

use crate::{
    EtlError, Res,
    types::{AlbumRecord, ArtistRecord, SongRecord},
};

/// A record type with a fixed CSV header.
pub trait Table: Serialize {
    const HEADER: &'static [&'static str];
}

impl Table for SongRecord {
    const HEADER: &'static [&'static str] = &[
        "song_id",
        "song_name",
        "duration_mins",
        "url",
        "popularity",
        "song_added",
        "album_id",
        "artist_id",
    ];
}

impl Table for AlbumRecord {
    const HEADER: &'static [&'static str] =
        &["album_id", "name", "release_date", "total_tracks", "url"];
}

impl Table for ArtistRecord {
    const HEADER: &'static [&'static str] = &["artist_id", "artist_name", "spotify_url"];
}

/// Serializes rows as comma-separated text with a header row.
///
/// The header is written even when there are no rows.
pub fn to_csv<T: Table>(rows: &[T]) -> Res<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(T::HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EtlError::Csv(e.to_string()))
}
