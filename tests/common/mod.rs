//! Shared fixtures for the integration tests.
//!
//! [`FakePlatform`] stands in for the Spotify client. It serves canned
//! playlists, features and recommendations, can be told to fail individual
//! calls, and records what the pipelines asked for.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use playlist_stats::{
    management::StatsManager,
    platform::{MusicPlatform, PlatformError},
    server::router,
    targets::TargetAttributes,
    types::{ApiAlbum, ApiArtist, ApiImage, ApiTrack, AudioFeatures, PlaylistItem},
};
use tokio::net::TcpListener;

#[derive(Default)]
pub struct FakePlatform {
    pub playlist: Vec<PlaylistItem>,
    pub features: HashMap<String, AudioFeatures>,
    pub catalog: HashMap<String, ApiTrack>,
    pub recommended: Vec<String>,

    pub fail_playlist: bool,
    pub fail_features: bool,
    pub fail_recommendations: bool,
    pub fail_tracks: bool,
    /// Return one feature entry fewer than requested.
    pub truncate_features: bool,

    pub recommendation_calls: Mutex<Vec<(Vec<String>, TargetAttributes)>>,
    pub feature_calls: Mutex<Vec<Vec<String>>>,
}

impl FakePlatform {
    pub fn with_tracks(tracks: Vec<(ApiTrack, Option<AudioFeatures>)>) -> Self {
        let mut fake = FakePlatform::default();
        for (track, features) in tracks {
            let id = track.id.clone().unwrap_or_default();
            if let Some(f) = features {
                fake.features.insert(id.clone(), f);
            }
            fake.catalog.insert(id, track.clone());
            fake.playlist.push(PlaylistItem { track: Some(track) });
        }
        fake
    }

    pub fn recorded_recommendations(&self) -> Vec<(Vec<String>, TargetAttributes)> {
        self.recommendation_calls.lock().unwrap().clone()
    }
}

fn boom() -> PlatformError {
    PlatformError::Auth("boom".to_string())
}

#[async_trait]
impl MusicPlatform for FakePlatform {
    async fn playlist_items(&self, _playlist_id: &str) -> Result<Vec<PlaylistItem>, PlatformError> {
        if self.fail_playlist {
            return Err(boom());
        }
        Ok(self.playlist.clone())
    }

    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, PlatformError> {
        self.feature_calls.lock().unwrap().push(ids.to_vec());
        if self.fail_features {
            return Err(boom());
        }

        let mut out: Vec<Option<AudioFeatures>> =
            ids.iter().map(|id| self.features.get(id).cloned()).collect();
        if self.truncate_features {
            out.pop();
        }
        Ok(out)
    }

    async fn recommendations(
        &self,
        seed_tracks: &[String],
        targets: &TargetAttributes,
    ) -> Result<Vec<String>, PlatformError> {
        self.recommendation_calls
            .lock()
            .unwrap()
            .push((seed_tracks.to_vec(), *targets));
        if self.fail_recommendations {
            return Err(boom());
        }
        Ok(self.recommended.clone())
    }

    async fn tracks(&self, ids: &[String]) -> Result<Vec<ApiTrack>, PlatformError> {
        if self.fail_tracks {
            return Err(boom());
        }
        Ok(ids
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect())
    }
}

pub fn api_track(id: &str, name: &str, artists: &[&str], popularity: i32) -> ApiTrack {
    ApiTrack {
        id: Some(id.to_string()),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| ApiArtist {
                name: a.to_string(),
            })
            .collect(),
        popularity,
        album: Some(ApiAlbum {
            images: vec![ApiImage {
                url: format!("https://img.example/{id}.jpg"),
            }],
        }),
        kind: Some("track".to_string()),
        episode: Some(false),
    }
}

/// A podcast episode as it shows up in the track slot of a playlist item.
pub fn api_episode(id: &str, name: &str) -> ApiTrack {
    ApiTrack {
        kind: Some("episode".to_string()),
        episode: Some(true),
        ..api_track(id, name, &[], 0)
    }
}

/// Features with acousticness and energy set, the other dimensions zero.
pub fn features(id: &str, acousticness: f64, energy: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        acousticness,
        energy,
        loudness: -7.5,
        ..AudioFeatures::default()
    }
}

/// Starts the real router on an ephemeral port and returns its base URL.
pub async fn spawn_server(platform: Arc<FakePlatform>) -> String {
    let manager = StatsManager::new(platform);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(manager)).await.unwrap();
    });

    format!("http://{addr}")
}
