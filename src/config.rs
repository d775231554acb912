//! Configuration management.
//!
//! Configuration is read from environment variables, optionally seeded from a
//! `.env` file in the platform-specific local data directory
//! (`radarcli/.env`). Real environment variables take priority; the file is
//! only a convenience.
//!
//! Commands that talk to the network call [`ensure`] first so that a missing
//! or malformed configuration is reported before any request is made.

use dotenv;
use std::{env, path::PathBuf};

const REQUIRED_VARS: &[&str] = &[
    "SERVER_ADDRESS",
    "SPOTIFY_USER_ID",
    "SPOTIFY_API_AUTH_CLIENT_ID",
    "SPOTIFY_API_REDIRECT_URI",
    "SPOTIFY_API_AUTH_SCOPE",
    "SPOTIFY_API_AUTH_URL",
    "SPOTIFY_API_TOKEN_URL",
    "SPOTIFY_API_URL",
];

/// Loads environment variables from `radarcli/.env` in the local data
/// directory, creating the directory if needed.
///
/// A missing file is not an error: the process environment may already carry
/// everything, and [`ensure`] reports whatever is still absent.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("radarcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("cannot load {}: {}", path.display(), e))?;
    }
    Ok(())
}

/// Verifies that every required variable is present and non-empty.
///
/// Returns the full list of problems at once so a user can fix their `.env`
/// in a single pass instead of replaying the command per variable.
pub fn ensure() -> Result<(), String> {
    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|key| env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "missing configuration: {}. Edit radarcli/.env in your local data directory.",
            missing.join(", ")
        ))
    }
}

/// Address and port for the local OAuth callback server.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Spotify username; keys the local snapshot cache.
pub fn spotify_user() -> String {
    env::var("SPOTIFY_USER_ID").expect("SPOTIFY_USER_ID must be set")
}

/// Client ID of the registered Spotify application.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// OAuth redirect URI; must match the application settings on Spotify's side.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Scope string requested during authorization.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Base URL of Spotify's OAuth authorization endpoint.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Token exchange endpoint.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Base URL of the Spotify Web API.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}
