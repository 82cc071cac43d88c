use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::stats::FeatureVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body of a client-credentials grant response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiAlbum {
    #[serde(default)]
    pub images: Vec<ApiImage>,
}

/// A track object as returned by the Web API.
///
/// Local files and some regional placeholders come back with a null `id`,
/// and playlists may hold podcast episodes in the same slot, so every field
/// the service needs is optional or defaulted here and checked in
/// [`ApiTrack::to_track`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ApiArtist>,
    #[serde(default)]
    pub popularity: i32,
    #[serde(default)]
    pub album: Option<ApiAlbum>,
    /// Object type, `"track"` or `"episode"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Legacy marker set on episodes served in the track slot.
    #[serde(default)]
    pub episode: Option<bool>,
}

impl ApiTrack {
    /// Whether the object is a music track rather than a podcast episode.
    pub fn is_track(&self) -> bool {
        let kind_ok = self.kind.as_deref().is_none_or(|kind| kind == "track");
        kind_ok && self.episode != Some(true)
    }

    /// Maps the raw track into the response shape, or `None` when the
    /// object is an episode or has no identifier.
    pub fn to_track(&self) -> Option<Track> {
        if !self.is_track() {
            return None;
        }
        let id = self.id.as_ref().filter(|id| !id.is_empty())?;

        let image_url = self
            .album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.clone())
            .unwrap_or_default();

        Some(Track {
            id: id.clone(),
            name: self.name.clone(),
            artists: self.artists.iter().map(|a| a.name.clone()).collect(),
            popularity: self.popularity,
            image_url,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

/// Raw audio features of a single track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub id: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    #[serde(default)]
    pub loudness: f64,
    pub speechiness: f64,
    pub valence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<ApiTrack>>,
}

/// A track as exposed by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Artists")]
    pub artists: Vec<String>,
    #[serde(rename = "Popularity")]
    pub popularity: i32,
    /// Cover of the first album image, empty when the album has none.
    #[serde(rename = "ImageURL")]
    pub image_url: String,
}

/// Response envelope shared by `/playlist` and `/recs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    #[serde(rename = "Tracks")]
    pub tracks: Vec<Track>,
    #[serde(rename = "Centroid")]
    pub centroid: FeatureVector,
    #[serde(rename = "MSE")]
    pub mse: f64,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub popularity: i32,
    pub id: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
}
