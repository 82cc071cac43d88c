//! Aggregate statistics over audio-feature vectors.
//!
//! Two quantities are computed for a set of tracks:
//!
//! - the **centroid**, the per-dimension arithmetic mean of the feature
//!   vectors, each vector weighted `1/n`;
//! - the **dispersion** (MSE), the mean over all vectors of the summed
//!   squared deviation from the centroid.
//!
//! Only seven bounded dimensions take part: acousticness, danceability,
//! energy, instrumentalness, liveness, speechiness and valence. Loudness is
//! measured in dB on a different scale and is left out on purpose, which is
//! why [`FeatureVector`] has no field for it.
//!
//! Summation follows slice order. Results are reproducible for a given
//! input, but reordering the same multiset may change the last bits of the
//! result.
//!
//! An empty input yields the all-zero centroid and a dispersion of `0.0`.

use serde::{Deserialize, Serialize};

use crate::types::AudioFeatures;

/// Names of the aggregated dimensions, in [`FeatureVector::to_array`] order.
pub const FEATURE_NAMES: [&str; 7] = [
    "acousticness",
    "danceability",
    "energy",
    "instrumentalness",
    "liveness",
    "speechiness",
    "valence",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub valence: f64,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.acousticness,
            self.danceability,
            self.energy,
            self.instrumentalness,
            self.liveness,
            self.speechiness,
            self.valence,
        ]
    }

    pub fn from_array(values: [f64; 7]) -> Self {
        let [
            acousticness,
            danceability,
            energy,
            instrumentalness,
            liveness,
            speechiness,
            valence,
        ] = values;

        Self {
            acousticness,
            danceability,
            energy,
            instrumentalness,
            liveness,
            speechiness,
            valence,
        }
    }
}

impl From<&AudioFeatures> for FeatureVector {
    fn from(features: &AudioFeatures) -> Self {
        // loudness stays out of the aggregate
        Self {
            acousticness: features.acousticness,
            danceability: features.danceability,
            energy: features.energy,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            speechiness: features.speechiness,
            valence: features.valence,
        }
    }
}

/// Computes the per-dimension mean of `vectors`.
///
/// Each vector contributes `value / n` to the running sum, in slice order.
/// Returns the zero vector when `vectors` is empty.
pub fn centroid(vectors: &[FeatureVector]) -> FeatureVector {
    if vectors.is_empty() {
        return FeatureVector::default();
    }

    let n = vectors.len() as f64;
    let mut sum = [0.0_f64; 7];

    for vector in vectors {
        for (acc, value) in sum.iter_mut().zip(vector.to_array()) {
            *acc += value / n;
        }
    }

    FeatureVector::from_array(sum)
}

/// Mean over `vectors` of the squared Euclidean distance to `centroid`.
///
/// Returns `0.0` when `vectors` is empty.
pub fn dispersion(vectors: &[FeatureVector], centroid: &FeatureVector) -> f64 {
    if vectors.is_empty() {
        return 0.0;
    }

    let center = centroid.to_array();
    let total: f64 = vectors
        .iter()
        .map(|vector| {
            center
                .iter()
                .zip(vector.to_array())
                .map(|(c, v)| (c - v).powi(2))
                .sum::<f64>()
        })
        .sum();

    total / vectors.len() as f64
}
