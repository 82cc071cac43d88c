use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    stats::FEATURE_NAMES,
    types::{FeatureTableRow, PlaylistInfo, TrackTableRow},
};

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub fn track_rows(info: &PlaylistInfo) -> Vec<TrackTableRow> {
    info.tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: t.artists.join(", "),
            popularity: t.popularity,
            id: t.id.clone(),
        })
        .collect()
}

pub fn feature_rows(info: &PlaylistInfo) -> Vec<FeatureTableRow> {
    let mut rows: Vec<FeatureTableRow> = FEATURE_NAMES
        .iter()
        .zip(info.centroid.to_array())
        .map(|(name, value)| FeatureTableRow {
            feature: name.to_string(),
            value: format!("{value:.4}"),
        })
        .collect();

    rows.push(FeatureTableRow {
        feature: "MSE".to_string(),
        value: format!("{:.4}", info.mse),
    });
    rows
}

/// Collects `(name, value)` pairs that were given on the command line into
/// the same shape as HTTP query parameters.
pub fn params_from_pairs(pairs: &[(&str, Option<&String>)]) -> HashMap<String, String> {
    pairs
        .iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.clone())))
        .collect()
}
