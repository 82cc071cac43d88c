use playlist_stats::spotify::SpotifyClient;

fn client(api_url: &str) -> SpotifyClient {
    SpotifyClient::new(
        reqwest::Client::new(),
        api_url.to_string(),
        "https://accounts.spotify.com/api/token".to_string(),
        "id".to_string(),
        "secret".to_string(),
    )
}

#[test]
fn test_endpoint_joins_segments() {
    let url = client("https://api.spotify.com/v1")
        .endpoint(&["playlists", "37i9dQZF1DXcBWIGoYBM5M", "tracks"])
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.spotify.com/v1/playlists/37i9dQZF1DXcBWIGoYBM5M/tracks"
    );
}

#[test]
fn test_endpoint_encodes_playlist_id() {
    let url = client("https://api.spotify.com/v1/")
        .endpoint(&["playlists", "../me?x=1#y", "tracks"])
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.spotify.com/v1/playlists/..%2Fme%3Fx=1%23y/tracks"
    );
    assert_eq!(url.query(), None);
    assert_eq!(url.path_segments().unwrap().count(), 4);
}

#[test]
fn test_endpoint_rejects_invalid_base() {
    assert!(client("not a url").endpoint(&["tracks"]).is_err());
}
