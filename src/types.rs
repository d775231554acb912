use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursors {
    pub after: Option<String>,
}

/// One page of the artist-albums endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<Album>,
    pub total: Option<u32>,
}

/// A raw album record as the API returns it.
///
/// `release_date` comes with a precision marker and is only resolved into a
/// calendar date during filtering; see [`crate::filter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub album_type: String,
    pub release_date: String,
    pub release_date_precision: String,
    #[serde(default)]
    pub available_markets: Vec<String>,
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

/// An artist together with the albums fetched for them. The value stored in
/// the daily snapshot cache and the input of the release filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistReleases {
    pub artist: Artist,
    pub albums: Vec<Album>,
}

/// An accepted album with its resolved calendar date. Transient: exists only
/// between filtering and rendering.
#[derive(Debug, Clone)]
pub struct Release {
    pub album: Album,
    pub date: NaiveDate,
}

#[derive(Tabled)]
pub struct ReleaseTableRow {
    #[tabled(rename = "type")]
    pub kind: String,
    pub date: String,
    pub link: String,
    pub artist: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
}
