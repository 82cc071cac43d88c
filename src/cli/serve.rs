use std::sync::Arc;

use crate::{
    config, error, info, management::StatsManager, server::start_api_server,
    spotify::SpotifyClient, success, warning,
};

/// Runs the HTTP API until the process is stopped.
///
/// The app token is requested once up front so credential problems show up
/// at startup. A failure there is only a warning: the next request tries
/// again.
pub async fn serve(address: Option<String>) {
    let client = match SpotifyClient::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    match client.authenticate().await {
        Ok(()) => success!("Spotify client started"),
        Err(e) => warning!("Could not obtain a token yet: {}", e),
    }

    let addr = address.unwrap_or_else(config::server_addr);
    info!("Serving playlist statistics on {}", addr);

    let manager = StatsManager::new(Arc::new(client));
    start_api_server(manager, &addr).await;
}
