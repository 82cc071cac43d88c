use std::sync::Arc;

use tabled::Table;

use crate::{
    error, info,
    management::{StatsError, StatsManager},
    spotify::SpotifyClient,
    targets::TargetAttributes,
    types::PlaylistInfo,
    utils, warning,
};

/// Prints the statistics of a playlist.
pub async fn playlist(id: String, json: bool) {
    let manager = manager_from_env();

    let pb = utils::spinner("Fetching playlist and audio features...");
    let result = manager.playlist(&id).await;
    pb.finish_and_clear();

    print_result(result, json);
}

/// Prints the statistics of tracks recommended from a playlist.
pub async fn recs(id: String, seeds: Option<String>, targets: TargetAttributes, json: bool) {
    let manager = manager_from_env();

    let pb = utils::spinner("Fetching recommendations...");
    let result = manager
        .recommendations(&id, seeds.as_deref(), &targets)
        .await;
    pb.finish_and_clear();

    print_result(result, json);
}

fn manager_from_env() -> StatsManager {
    match SpotifyClient::from_env() {
        Ok(client) => StatsManager::new(Arc::new(client)),
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    }
}

fn print_result(result: Result<PlaylistInfo, StatsError>, json: bool) {
    let info = match result {
        Ok(info) => info,
        Err(e) => match std::error::Error::source(&e) {
            Some(cause) => error!("{}: {}", e, cause),
            None => error!("{}", e),
        },
    };

    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to encode result. Err: {}", e),
        }
        return;
    }

    if info.tracks.is_empty() {
        warning!("No tracks with audio features found");
    } else {
        let table = Table::new(utils::track_rows(&info));
        println!("{}", table);
    }

    info!("Centroid over {} tracks", info.tracks.len());
    println!("{}", Table::new(utils::feature_rows(&info)));
}
