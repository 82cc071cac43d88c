//! # Spotify Integration Module
//!
//! Concrete [`MusicPlatform`](crate::platform::MusicPlatform) backed by the
//! Spotify Web API.
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 client-credentials grant. The service
//! acts on behalf of itself, not of a user, so there is no browser flow and
//! no refresh token: when the app token gets close to expiry a new one is
//! requested with the same credentials.
//!
//! ## API Coverage
//!
//! [`client`] covers the endpoints the statistics pipeline needs:
//!
//! - `GET /playlists/{id}/tracks` - first page of playlist items
//! - `GET /audio-features` - feature vectors, batched by 100
//! - `GET /recommendations` - recommended tracks for seeds and targets
//! - `GET /tracks` - full track records, batched by 50
//!
//! ## Error Handling
//!
//! Non-2xx responses, network failures and timeouts surface as
//! [`PlatformError`](crate::platform::PlatformError). Nothing is retried;
//! the caller aborts the request on the first failure.

pub mod auth;
pub mod client;

pub use client::SpotifyClient;
