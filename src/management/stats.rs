use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    platform::{MusicPlatform, PlatformError},
    seeds, stats,
    stats::FeatureVector,
    targets::TargetAttributes,
    types::{AudioFeatures, PlaylistInfo, Track},
};

/// Reasons a statistics request stops early.
///
/// The `Display` text is what clients receive as the response body.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("failed to get playlist")]
    Playlist(#[source] PlatformError),
    #[error("failed to get audio features")]
    AudioFeatures(#[source] PlatformError),
    #[error("failed to get audio features")]
    FeatureCountMismatch { requested: usize, returned: usize },
    #[error("failed to get recommendations")]
    Recommendations(#[source] PlatformError),
    #[error("failed to get tracks")]
    Tracks(#[source] PlatformError),
    #[error("no seed tracks available")]
    NoSeeds,
}

/// Runs the playlist and recommendation pipelines against a platform.
///
/// Each call is a sequential chain of platform requests that stops at the
/// first failure. The manager holds no per-request state and is cheap to
/// clone.
#[derive(Clone)]
pub struct StatsManager {
    platform: Arc<dyn MusicPlatform>,
}

impl StatsManager {
    pub fn new(platform: Arc<dyn MusicPlatform>) -> Self {
        StatsManager { platform }
    }

    /// Tracks of a playlist with the centroid and MSE of their features.
    ///
    /// Items without track data are skipped.
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistInfo, StatsError> {
        debug!(id = playlist_id, "got request for playlist");

        let tracks = self.playlist_tracks(playlist_id).await?;
        let features = self.features_for(&tracks).await?;

        Ok(summarize(tracks, features))
    }

    /// Recommended tracks with the centroid and MSE of their features.
    ///
    /// Seeds come from `explicit_seeds` when given, otherwise up to five
    /// random tracks of the playlist are used.
    pub async fn recommendations(
        &self,
        playlist_id: &str,
        explicit_seeds: Option<&str>,
        targets: &TargetAttributes,
    ) -> Result<PlaylistInfo, StatsError> {
        debug!(id = playlist_id, "got request for playlist recommendations");

        let playlist = self.playlist_tracks(playlist_id).await?;
        let ids: Vec<String> = playlist.into_iter().map(|t| t.id).collect();

        // ThreadRng is !Send, keep it out of the await points
        let seeds = {
            let mut rng = rand::rng();
            seeds::select_seeds(&ids, explicit_seeds, &mut rng)
        };
        if seeds.is_empty() {
            debug!(id = playlist_id, "no seed tracks available");
            return Err(StatsError::NoSeeds);
        }

        debug!(?seeds, ?targets, "made recommendations using songs as seeds");

        let rec_ids = self
            .platform
            .recommendations(&seeds, targets)
            .await
            .map_err(|e| {
                debug!(error = %e, "failed to get recommendations");
                StatsError::Recommendations(e)
            })?;

        let tracks: Vec<Track> = if rec_ids.is_empty() {
            Vec::new()
        } else {
            self.platform
                .tracks(&rec_ids)
                .await
                .map_err(|e| {
                    debug!(error = %e, "failed to get tracks");
                    StatsError::Tracks(e)
                })?
                .iter()
                .filter_map(|raw| raw.to_track())
                .collect()
        };

        let features = self.features_for(&tracks).await?;

        Ok(summarize(tracks, features))
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, StatsError> {
        let items = self
            .platform
            .playlist_items(playlist_id)
            .await
            .map_err(|e| {
                debug!(error = %e, "failed to get playlist");
                StatsError::Playlist(e)
            })?;

        let mut tracks = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            match item.track.as_ref().and_then(|raw| raw.to_track()) {
                Some(track) => tracks.push(track),
                None => debug!(position, "skipped track cause missing information"),
            }
        }

        Ok(tracks)
    }

    /// Looks up features for `tracks`, one entry per track, in order.
    async fn features_for(
        &self,
        tracks: &[Track],
    ) -> Result<Vec<Option<AudioFeatures>>, StatsError> {
        if tracks.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();
        let features = self.platform.audio_features(&ids).await.map_err(|e| {
            debug!(error = %e, "failed to get audio features");
            StatsError::AudioFeatures(e)
        })?;

        if features.len() != ids.len() {
            debug!(
                requested = ids.len(),
                returned = features.len(),
                "audio features do not line up with tracks"
            );
            return Err(StatsError::FeatureCountMismatch {
                requested: ids.len(),
                returned: features.len(),
            });
        }

        Ok(features)
    }
}

/// Pairs tracks with their features and aggregates the result.
///
/// `features` must be aligned with `tracks`. Tracks whose entry is `None`
/// are dropped from the output before the centroid is computed.
pub fn summarize(tracks: Vec<Track>, features: Vec<Option<AudioFeatures>>) -> PlaylistInfo {
    let mut kept = Vec::with_capacity(tracks.len());
    let mut vectors = Vec::with_capacity(tracks.len());

    for (track, feature) in tracks.into_iter().zip(features) {
        match feature {
            Some(f) => {
                vectors.push(FeatureVector::from(&f));
                kept.push(track);
            }
            None => debug!(id = %track.id, "skipped track without audio features"),
        }
    }

    let centroid = stats::centroid(&vectors);
    let mse = stats::dispersion(&vectors, &centroid);

    PlaylistInfo {
        tracks: kept,
        centroid,
        mse,
    }
}
