//! The music-platform capability the request handlers depend on.
//!
//! Handlers never talk to the network directly; they go through a
//! [`MusicPlatform`] so the Spotify client can be swapped for a fake in
//! tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    targets::TargetAttributes,
    types::{ApiTrack, AudioFeatures, PlaylistItem},
};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth error: {0}")]
    Auth(String),
    #[error("config error: {0}")]
    Config(String),
}

#[async_trait]
pub trait MusicPlatform: Send + Sync {
    /// Items of a playlist, in playlist order. Items without track data
    /// are returned with `track: None`.
    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, PlatformError>;

    /// Audio features aligned to `ids`; tracks without analysis map to `None`.
    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, PlatformError>;

    /// IDs of tracks recommended for the given seeds and targets.
    async fn recommendations(
        &self,
        seed_tracks: &[String],
        targets: &TargetAttributes,
    ) -> Result<Vec<String>, PlatformError>;

    /// Full track records for `ids`.
    async fn tracks(&self, ids: &[String]) -> Result<Vec<ApiTrack>, PlatformError>;
}
