use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{Artist, FollowedArtistsResponse},
};

const PAGE_LIMIT: u64 = 50;

/// Retrieves one page of followed artists.
///
/// Uses cursor-based pagination: pass the cursor returned by the previous
/// call as `after` to continue. 502 responses are retried in place after a
/// 10 second delay; other errors are propagated.
pub async fn fetch_followed_page(
    token: &str,
    limit: u64,
    after: Option<String>,
) -> Result<(Vec<Artist>, Option<String>), reqwest::Error> {
    loop {
        let mut api_url = format!(
            "{uri}/me/following?type=artist&limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = limit
        );
        if let Some(after_val) = &after {
            api_url.push_str(&format!("&after={}", after_val));
        }

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<FollowedArtistsResponse>().await?;
        let next_after = res.artists.cursors.and_then(|c| c.after);

        return Ok((res.artists.items, next_after));
    }
}

/// Walks the cursor chain until the API reports no further page and returns
/// the complete list of followed artists.
pub async fn fetch_all_followed(
    token_mgr: &mut TokenManager,
) -> Result<Vec<Artist>, reqwest::Error> {
    let mut all_artists: Vec<Artist> = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let token = token_mgr.get_valid_token().await;
        let (artists, next_after) = fetch_followed_page(&token, PAGE_LIMIT, after).await?;

        if artists.is_empty() {
            break;
        }
        all_artists.extend(artists);

        after = next_after;
        if after.is_none() {
            break;
        }
    }

    Ok(all_artists)
}
