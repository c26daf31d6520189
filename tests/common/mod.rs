#![allow(dead_code)]

use serde_json::{Value, json};
use spotify_etl::config::MailConfig;

pub fn mail() -> MailConfig {
    MailConfig {
        sender: "etl@example.com".to_string(),
        recipient: "ops@example.com".to_string(),
    }
}

pub fn artist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "artist",
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{id}") }
    })
}

pub fn album(id: &str, name: &str, release_date: &str, total_tracks: u32, artists: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "release_date": release_date,
        "release_date_precision": "day",
        "total_tracks": total_tracks,
        "external_urls": { "spotify": format!("https://open.spotify.com/album/{id}") },
        "artists": artists
    })
}

pub fn item(id: &str, name: &str, duration_ms: u64, album: Value, artists: Vec<Value>) -> Value {
    json!({
        "added_at": "2023-06-05T07:00:00Z",
        "is_local": false,
        "track": {
            "id": id,
            "name": name,
            "duration_ms": duration_ms,
            "popularity": 42,
            "explicit": false,
            "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
            "album": album,
            "artists": artists
        }
    })
}

pub fn playlist(items: Vec<Value>) -> Value {
    json!({
        "href": "https://api.spotify.com/v1/playlists/pl/tracks",
        "limit": 100,
        "next": null,
        "offset": 0,
        "total": items.len(),
        "items": items
    })
}

/// Two songs on the same album by the same artist.
pub fn two_song_playlist() -> Value {
    let album1 = album("al1", "Album1", "2020-05-01", 10, vec![artist("a1", "Artist1")]);
    playlist(vec![
        item("s1", "Song1", 210_000, album1.clone(), vec![artist("a1", "Artist1")]),
        item("s2", "Song2", 195_000, album1, vec![artist("a1", "Artist1")]),
    ])
}
