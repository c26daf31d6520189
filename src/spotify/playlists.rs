use serde_json::Value;

use super::SpotifyClient;
use crate::Res;

/// Retrieves the first page of playlists owned by `user`.
///
/// The extractor only calls this for parity with the listing it has always
/// made before fetching tracks; the result is not stored.
pub async fn get_user_playlists(client: &SpotifyClient, user: &str) -> Res<Value> {
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = client.config().api_url,
        user = user
    );
    client.get_json(&api_url).await
}

/// Retrieves the track listing of a playlist as returned by the API.
///
/// A single request is made; only the first page of items (Spotify's default
/// of 100) is returned and `next` is not followed.
pub async fn get_playlist_tracks(client: &SpotifyClient, playlist_id: &str) -> Res<Value> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = client.config().api_url,
        id = playlist_id
    );
    client.get_json(&api_url).await
}
