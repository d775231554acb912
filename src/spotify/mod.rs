//! # Spotify Integration Module
//!
//! The HTTP layer between the CLI and the Spotify Web API. Each submodule
//! covers one domain:
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation is in
//!   `utils`, the callback endpoint in `api`, and this module orchestrates
//!   browser launch, waiting for the callback, and token persistence.
//! - [`artists`] - cursor-paginated retrieval of the user's followed
//!   artists (`GET /me/following`).
//! - [`albums`] - offset-paginated retrieval of an artist's releases
//!   (`GET /artists/{id}/albums`), with rate-limit handling and retries.
//!
//! ## Error handling
//!
//! Transient upstream failures (502 Bad Gateway) are retried in place after
//! a short delay. Rate limiting (429) honors the `Retry-After` header for
//! delays up to two minutes. Everything else is propagated: per-artist
//! failures are isolated by the caller, not here.

pub mod albums;
pub mod artists;
pub mod auth;
