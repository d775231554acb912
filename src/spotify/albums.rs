use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{Album, AlbumsPage},
    utils::ReleaseKinds,
    warning,
};

const PAGE_LIMIT: u32 = 50;
const MAX_ATTEMPTS: u32 = 3;

/// Retrieves every release of one artist, paging by offset until the API
/// returns a short page.
///
/// Records where the requested artist is not the primary artist are dropped:
/// compilations an artist merely appears on would otherwise flood the radar.
///
/// Rate limiting is handled in place: a 429 with a `Retry-After` of up to
/// two minutes sleeps and retries the same page; longer delays abort with
/// whatever was fetched so far. 502 responses retry after 10 seconds.
pub async fn fetch_for_artist(
    artist_id: &str,
    token: &str,
    kinds: &ReleaseKinds,
) -> Result<Vec<Album>, reqwest::Error> {
    let client = Client::new();
    let mut albums: Vec<Album> = Vec::new();
    let mut offset: u32 = 0;

    loop {
        let api_url = format!(
            "{uri}/artists/{id}/albums?include_groups={include_groups}&limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            id = artist_id,
            include_groups = kinds,
            limit = PAGE_LIMIT,
            offset = offset
        );

        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10);
            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                continue; // retry the same page
            }
            warning!(
                "Rate limited for {} seconds; giving up on this artist for now.",
                retry_after
            );
            return Ok(albums);
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if err.status() == Some(StatusCode::BAD_GATEWAY) {
                    sleep(Duration::from_secs(10)).await;
                    continue; // retry
                }
                return Err(err); // propagate other errors
            }
        };

        let page = response.json::<AlbumsPage>().await?;
        let fetched = page.items.len();

        albums.extend(
            page.items
                .into_iter()
                .filter(|album| album.artists.first().map(|a| a.id.as_str()) == Some(artist_id)),
        );

        if fetched < PAGE_LIMIT as usize {
            break;
        }
        offset += PAGE_LIMIT;
    }

    Ok(albums)
}

/// [`fetch_for_artist`] with up to three attempts and a doubling backoff.
///
/// A fresh token is taken per attempt, so an expiry mid-scan heals itself on
/// the next try instead of failing the artist.
pub async fn fetch_with_retry(
    artist_id: &str,
    token_mgr: &mut TokenManager,
    kinds: &ReleaseKinds,
) -> Result<Vec<Album>, reqwest::Error> {
    let mut backoff = Duration::from_millis(500);
    let mut attempt = 1;

    loop {
        let token = token_mgr.get_valid_token().await;
        match fetch_for_artist(artist_id, &token, kinds).await {
            Ok(albums) => return Ok(albums),
            Err(err) if attempt < MAX_ATTEMPTS => {
                warning!(
                    "Fetching releases for artist {} failed (attempt {}/{}): {}",
                    artist_id,
                    attempt,
                    MAX_ATTEMPTS,
                    err
                );
                sleep(backoff).await;
                backoff *= 2;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
