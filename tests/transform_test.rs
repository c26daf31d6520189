mod common;

use chrono::NaiveDate;
use common::*;
use spotify_etl::EtlError;
use spotify_etl::transform::*;
use spotify_etl::types::RawPlaylist;
use std::collections::HashSet;

fn parse(value: serde_json::Value) -> RawPlaylist {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_two_song_scenario() {
    let doc = parse(two_song_playlist());
    let tables = EntityTables::from_document(&doc).unwrap();

    assert_eq!(tables.songs.len(), 2);
    assert_eq!(tables.songs[0].song_id, "s1");
    assert_eq!(tables.songs[0].duration_mins, 3.5);
    assert_eq!(tables.songs[1].song_id, "s2");
    assert_eq!(tables.songs[1].duration_mins, 3.25);

    assert_eq!(tables.albums.len(), 1);
    assert_eq!(tables.albums[0].album_id, "al1");
    assert_eq!(tables.albums[0].name, "Album1");
    assert_eq!(tables.albums[0].total_tracks, 10);
    assert_eq!(
        tables.albums[0].release_date,
        NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
    );

    assert_eq!(tables.artists.len(), 1);
    assert_eq!(tables.artists[0].artist_id, "a1");
    assert_eq!(tables.artists[0].artist_name, "Artist1");
    assert_eq!(
        tables.artists[0].spotify_url,
        "https://open.spotify.com/artist/a1"
    );
}

#[test]
fn test_song_fields_come_from_track_and_album() {
    let doc = parse(two_song_playlist());
    let songs = songs(&doc).unwrap();

    let first = &songs[0];
    assert_eq!(first.song_name, "Song1");
    assert_eq!(first.url, "https://open.spotify.com/track/s1");
    assert_eq!(first.popularity, 42);
    assert_eq!(first.album_id, "al1");
    assert_eq!(first.artist_id, "a1");
    assert_eq!(
        first.song_added.to_rfc3339(),
        "2023-06-05T07:00:00+00:00"
    );
}

#[test]
fn test_duration_is_rounded_to_two_decimals() {
    assert_eq!(duration_mins(60_000), 1.0);
    assert_eq!(duration_mins(200_000), 3.33);
    assert_eq!(duration_mins(0), 0.0);
    assert_eq!(round2(2.675_1), 2.68);
}

#[test]
fn test_duration_halfway_values_follow_the_stored_float() {
    // ms / 60000 lands on an apparent .xx5 for these
    assert_eq!(duration_mins(900), 0.01);
    assert_eq!(duration_mins(2_700), 0.04);
    assert_eq!(duration_mins(4_500), 0.07);
    assert_eq!(duration_mins(210_300), 3.5);
    assert_eq!(round2(2.675), 2.67);
}

#[test]
fn test_songs_are_not_deduplicated() {
    let al = album("al1", "Album1", "2020", 1, vec![artist("a1", "Artist1")]);
    let doc = parse(playlist(vec![
        item("s1", "Song1", 1000, al.clone(), vec![artist("a1", "Artist1")]),
        item("s1", "Song1", 1000, al, vec![artist("a1", "Artist1")]),
    ]));

    assert_eq!(songs(&doc).unwrap().len(), 2);
    assert_eq!(albums(&doc).unwrap().len(), 1);
}

#[test]
fn test_album_first_occurrence_wins() {
    let doc = parse(playlist(vec![
        item(
            "s1",
            "Song1",
            1000,
            album("al1", "First Title", "2020-01-01", 5, vec![artist("a1", "A")]),
            vec![artist("a1", "A")],
        ),
        item(
            "s2",
            "Song2",
            1000,
            album("al1", "Second Title", "2020-01-01", 5, vec![artist("a1", "A")]),
            vec![artist("a1", "A")],
        ),
    ]));

    let albums = albums(&doc).unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].name, "First Title");
}

#[test]
fn test_release_date_precisions() {
    let doc = parse(playlist(vec![
        item("s1", "x", 1, album("day", "d", "2021-03-04", 1, vec![artist("a", "A")]), vec![]),
        item("s2", "x", 1, album("month", "m", "2021-03", 1, vec![artist("a", "A")]), vec![]),
        item("s3", "x", 1, album("year", "y", "2021", 1, vec![artist("a", "A")]), vec![]),
    ]));

    let dates: Vec<NaiveDate> = albums(&doc)
        .unwrap()
        .into_iter()
        .map(|a| a.release_date)
        .collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        ]
    );
}

#[test]
fn test_unparseable_release_date_fails_the_document() {
    let doc = parse(playlist(vec![item(
        "s1",
        "x",
        1,
        album("al", "a", "someday", 1, vec![artist("a", "A")]),
        vec![artist("a", "A")],
    )]));

    let err = EntityTables::from_document(&doc).unwrap_err();
    assert!(matches!(err, EtlError::InvalidDate { field: "release_date", .. }));
}

#[test]
fn test_multi_artist_tracks_are_flattened() {
    let doc = parse(playlist(vec![
        item(
            "s1",
            "Duet",
            1000,
            album("al1", "A1", "2020", 2, vec![artist("a1", "One")]),
            vec![artist("a1", "One"), artist("a2", "Two")],
        ),
        item(
            "s2",
            "Trio",
            1000,
            album("al2", "A2", "2020", 2, vec![artist("a3", "Three")]),
            vec![artist("a2", "Two"), artist("a3", "Three"), artist("a4", "Four")],
        ),
    ]));

    let ids: Vec<String> = artists(&doc).into_iter().map(|a| a.artist_id).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3", "a4"]);
}

#[test]
fn test_song_artist_always_resolves() {
    // album artist never appears among the track artists
    let doc = parse(playlist(vec![item(
        "s1",
        "Remix",
        1000,
        album("al1", "Remixes", "2019", 12, vec![artist("va", "Various Artists")]),
        vec![artist("a1", "Producer")],
    )]));

    let tables = EntityTables::from_document(&doc).unwrap();
    let artist_ids: HashSet<&str> = tables.artists.iter().map(|a| a.artist_id.as_str()).collect();
    let album_ids: HashSet<&str> = tables.albums.iter().map(|a| a.album_id.as_str()).collect();

    for song in &tables.songs {
        assert!(artist_ids.contains(song.artist_id.as_str()));
        assert!(album_ids.contains(song.album_id.as_str()));
    }
    assert_eq!(tables.songs[0].artist_id, "va");
}

#[test]
fn test_album_without_artists_is_a_missing_field() {
    let doc = parse(playlist(vec![item(
        "s1",
        "x",
        1,
        album("al", "a", "2020", 1, vec![]),
        vec![artist("a", "A")],
    )]));

    assert!(matches!(songs(&doc), Err(EtlError::MissingField(_))));
}

#[test]
fn test_malformed_document_is_rejected() {
    let err = parse_document("to_process/bad.json", b"{\"items\": [{\"track\": {}}]}").unwrap_err();
    match err {
        EtlError::Document { key, .. } => assert_eq!(key, "to_process/bad.json"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(parse_document("x.json", b"not json").is_err());
}

#[test]
fn test_empty_document_yields_header_only_tables() {
    let doc = parse(playlist(vec![]));
    let tables = EntityTables::from_document(&doc).unwrap();

    assert!(tables.songs.is_empty());
    assert_eq!(
        tables.songs_csv().unwrap(),
        "song_id,song_name,duration_mins,url,popularity,song_added,album_id,artist_id\n"
    );
    assert_eq!(
        tables.albums_csv().unwrap(),
        "album_id,name,release_date,total_tracks,url\n"
    );
    assert_eq!(
        tables.artists_csv().unwrap(),
        "artist_id,artist_name,spotify_url\n"
    );
}

#[test]
fn test_csv_output() {
    let doc = parse(two_song_playlist());
    let tables = EntityTables::from_document(&doc).unwrap();

    let songs = tables.songs_csv().unwrap();
    let lines: Vec<&str> = songs.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "s1,Song1,3.5,https://open.spotify.com/track/s1,42,2023-06-05 07:00:00+00:00,al1,a1"
    );
    assert_eq!(
        lines[2],
        "s2,Song2,3.25,https://open.spotify.com/track/s2,42,2023-06-05 07:00:00+00:00,al1,a1"
    );

    assert_eq!(
        tables.albums_csv().unwrap(),
        "album_id,name,release_date,total_tracks,url\n\
         al1,Album1,2020-05-01,10,https://open.spotify.com/album/al1\n"
    );
}

#[test]
fn test_csv_quotes_delimiters_in_names() {
    let doc = parse(playlist(vec![item(
        "s1",
        "Hello, World",
        1000,
        album("al1", "A", "2020", 1, vec![artist("a1", "A")]),
        vec![artist("a1", "A")],
    )]));

    let csv = EntityTables::from_document(&doc).unwrap().songs_csv().unwrap();
    assert!(csv.contains("\"Hello, World\""));
}

#[test]
fn test_row_count_bounds() {
    let doc = parse(playlist(vec![
        item(
            "s1",
            "x",
            1,
            album("al1", "A", "2020", 1, vec![artist("a1", "A")]),
            vec![artist("a1", "A"), artist("a2", "B")],
        ),
        item(
            "s2",
            "y",
            1,
            album("al2", "B", "2020", 1, vec![artist("a2", "B")]),
            vec![artist("a2", "B")],
        ),
        item(
            "s3",
            "z",
            1,
            album("al1", "A", "2020", 1, vec![artist("a1", "A")]),
            vec![artist("a1", "A")],
        ),
    ]));
    let tables = EntityTables::from_document(&doc).unwrap();

    let n = doc.items.len();
    let artist_refs: usize = doc.items.iter().map(|i| i.track.artists.len()).sum();
    assert_eq!(tables.songs.len(), n);
    assert!(tables.albums.len() <= n);
    assert_eq!(tables.albums.len(), 2);
    assert!(tables.artists.len() <= artist_refs);
    assert_eq!(tables.artists.len(), 2);
}
