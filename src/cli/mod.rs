//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the
//! management layer (token and snapshot caches), the Spotify integration
//! layer, and the filtering/rendering pipeline, and owns all user feedback:
//! progress bars during fetches, colored status lines, and the final table.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE authentication flow
//! - [`radar`] - the main pipeline: snapshot (cached or fetched), name
//!   heuristics, release filter, sorted table
//! - [`list_artists`] / [`update_artists`] - inspect and refresh the
//!   followed-artist snapshot
//!
//! ## Error handling
//!
//! Fatal problems (missing configuration, no token, failed artist-list
//! fetch) terminate via the `error!` macro. Per-artist album fetch failures
//! are logged and skipped so a single flaky artist cannot ruin a scan.

mod artists;
mod auth;
mod radar;

pub use artists::list_artists;
pub use artists::update_artists;
pub use auth::auth;
pub use radar::RadarRequest;
pub use radar::radar;
