//! Configuration management for the playlist statistics service.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. The lookup order is:
//! 1. Environment variables already set (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::platform::PlatformError;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// The local data directory is checked first:
/// - Linux: `~/.local/share/playlist-stats/.env`
/// - macOS: `~/Library/Application Support/playlist-stats/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-stats/.env`
///
/// then `.env` in the working directory. Variables that are already set are
/// never overwritten, and a missing file is not an error.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-stats/.env");
    path
}

fn required(name: &str) -> Result<String, PlatformError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlatformError::Config(format!("{name} must be set"))),
    }
}

/// Address the HTTP server binds to, from `SERVER_ADDRESS`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Spotify application client ID, from `CLIENT_ID`.
pub fn spotify_client_id() -> Result<String, PlatformError> {
    required("CLIENT_ID")
}

/// Spotify application client secret, from `CLIENT_SECRET`.
///
/// Never log this value.
pub fn spotify_client_secret() -> Result<String, PlatformError> {
    required("CLIENT_SECRET")
}

/// Web API base URL without trailing slash, from `SPOTIFY_API_URL`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Token endpoint for the client-credentials grant, from `SPOTIFY_API_TOKEN_URL`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_TOKEN_URL.to_string())
}

/// Deadline for each outbound call, from `SPOTIFY_HTTP_TIMEOUT_SECS`.
///
/// Unparsable or zero values fall back to the default.
pub fn http_timeout() -> Duration {
    let secs = env::var("SPOTIFY_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    Duration::from_secs(secs)
}
