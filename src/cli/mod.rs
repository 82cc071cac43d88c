//! # CLI Module
//!
//! User-facing commands of `playlist-stats`.
//!
//! - [`serve`] - runs the HTTP API (`/playlist`, `/recs`, `/health`)
//! - [`playlist`] - prints the statistics of one playlist
//! - [`recs`] - prints the statistics of recommendations seeded from a
//!   playlist
//!
//! The one-shot commands go through the same
//! [`StatsManager`](crate::management::StatsManager) pipelines as the HTTP
//! handlers, so their numbers match what the API returns. Results are shown
//! as tables, or as the API's JSON with `--json`.
//!
//! ```bash
//! playlist-stats serve --address 127.0.0.1:8080
//! playlist-stats playlist 37i9dQZF1DXcBWIGoYBM5M
//! playlist-stats recs 37i9dQZF1DXcBWIGoYBM5M --energy 0.8 --valence 0.3
//! playlist-stats recs 37i9dQZF1DXcBWIGoYBM5M --seeds 4uLU6hMCjMI75M1A2tKUQC --json
//! ```

mod serve;
mod stats;

pub use serve::serve;
pub use stats::playlist;
pub use stats::recs;
