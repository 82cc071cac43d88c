use async_trait::async_trait;
use reqwest::{Client, Url, header};

use crate::{
    config,
    platform::{MusicPlatform, PlatformError},
    spotify::auth::TokenManager,
    targets::TargetAttributes,
    types::{
        ApiTrack, AudioFeatures, AudioFeaturesResponse, PlaylistItem, PlaylistTracksResponse,
        RecommendationsResponse, SeveralTracksResponse,
    },
};

/// Page size for playlist items. Only the first page is read.
const PLAYLIST_PAGE_LIMIT: u32 = 100;
/// Maximum IDs per `/audio-features` request.
const AUDIO_FEATURES_BATCH: usize = 100;
/// Maximum IDs per `/tracks` request.
const TRACKS_BATCH: usize = 50;

/// Web API client authenticated as the application itself.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    auth: TokenManager,
}

impl SpotifyClient {
    pub fn new(
        http: Client,
        api_url: String,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        let auth = TokenManager::new(http.clone(), token_url, client_id, client_secret);
        SpotifyClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Builds a client from the environment.
    ///
    /// Every request made through it carries the configured deadline.
    pub fn from_env() -> Result<Self, PlatformError> {
        let client_id = config::spotify_client_id()?;
        let client_secret = config::spotify_client_secret()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(config::http_timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self::new(
            http,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
            client_id,
            client_secret,
        ))
    }

    /// Fetches the app token ahead of the first request.
    pub async fn authenticate(&self) -> Result<(), PlatformError> {
        self.auth.get_valid_token().await.map(|_| ())
    }

    /// URL of an API resource below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so IDs cannot add path
    /// segments or start a query string.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, PlatformError> {
        let base = &self.api_url;
        let mut url = Url::parse(base)
            .map_err(|e| PlatformError::Config(format!("invalid API url {base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| PlatformError::Config(format!("API url {base} cannot have a path")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<T>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<T, PlatformError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let token = self.auth.get_valid_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MusicPlatform for SpotifyClient {
    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, PlatformError> {
        let res: PlaylistTracksResponse = self
            .get(
                &["playlists", playlist_id, "tracks"],
                &[("limit".to_string(), PLAYLIST_PAGE_LIMIT.to_string())],
            )
            .await?;

        Ok(res.items)
    }

    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, PlatformError> {
        let mut features = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(AUDIO_FEATURES_BATCH) {
            let res: AudioFeaturesResponse = self
                .get(
                    &["audio-features"],
                    &[("ids".to_string(), chunk.join(","))],
                )
                .await?;
            features.extend(res.audio_features);
        }

        Ok(features)
    }

    async fn recommendations(
        &self,
        seed_tracks: &[String],
        targets: &TargetAttributes,
    ) -> Result<Vec<String>, PlatformError> {
        let mut query = vec![("seed_tracks".to_string(), seed_tracks.join(","))];
        query.extend(targets.to_query());

        let res: RecommendationsResponse = self.get(&["recommendations"], &query).await?;

        Ok(res.tracks.into_iter().filter_map(|t| t.id).collect())
    }

    async fn tracks(&self, ids: &[String]) -> Result<Vec<ApiTrack>, PlatformError> {
        let mut tracks = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(TRACKS_BATCH) {
            let res: SeveralTracksResponse = self
                .get(&["tracks"], &[("ids".to_string(), chunk.join(","))])
                .await?;
            tracks.extend(res.tracks.into_iter().flatten());
        }

        Ok(tracks)
    }
}
