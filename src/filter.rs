//! Release filtering.
//!
//! Consumes the artist→albums mapping produced by the retrieval layer and
//! yields the ordered list of releases worth showing: available in the
//! configured region, of an allowed type, recent enough, and not a duplicate
//! of a release already accepted under the same name.
//!
//! The filter is pure: it reads borrowed retrieval data, owns its output, and
//! never touches the network or the cache. Display concerns (link
//! derivation, name truncation) live in [`crate::render`] and run strictly
//! after filtering.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;

use crate::heuristics;
use crate::types::{Album, ArtistReleases, Release};
use crate::utils::ReleaseKinds;

/// How the age window treats the sign of the day delta.
///
/// With `Signed`, a release is recent enough when
/// `today - release_date < max_age_days`. That bounds only how far in the
/// past a release may lie; a future-dated release has a negative delta and
/// always passes. This is the long-standing default behavior of the radar
/// and what returning users expect.
///
/// With `Absolute`, the window is symmetric:
/// `|today - release_date| < max_age_days`. Pre-announced releases dated far
/// in the future are excluded instead of admitted unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeWindow {
    #[default]
    Signed,
    Absolute,
}

impl AgeWindow {
    fn admits(self, day_delta: i64, max_age_days: i64) -> bool {
        match self {
            AgeWindow::Signed => day_delta < max_age_days,
            AgeWindow::Absolute => day_delta.abs() < max_age_days,
        }
    }
}

/// Everything the filter needs to decide inclusion. Passed in explicitly;
/// the filter keeps no state between passes.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// ISO 3166-1 alpha-2 region code a release must be licensed in.
    pub region: String,
    /// Release types to keep.
    pub allowed: ReleaseKinds,
    /// Size of the recency window in days.
    pub max_age_days: i64,
    /// Reference date the window is anchored to.
    pub today: NaiveDate,
    pub age_window: AgeWindow,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FilterError {
    /// A release date could not be resolved for its precision marker.
    /// Fatal for the whole pass; there is no sensible partial result when
    /// the input data is malformed.
    DateParse {
        album: String,
        raw: String,
        precision: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::DateParse {
                album,
                raw,
                precision,
            } => write!(
                f,
                "cannot parse release date '{}' (precision '{}') of album '{}'",
                raw, precision, album
            ),
        }
    }
}

impl std::error::Error for FilterError {}

/// Resolves an album's release date according to its precision marker.
///
/// - `year` resolves to January 1 of that year
/// - `month` resolves to the 1st of that month
/// - `day` parses as an ISO calendar date
///
/// Any other marker, or a date string that does not match its marker, is a
/// [`FilterError::DateParse`].
pub fn resolve_release_date(album: &Album) -> Result<NaiveDate, FilterError> {
    let parse_err = || FilterError::DateParse {
        album: album.name.clone(),
        raw: album.release_date.clone(),
        precision: album.release_date_precision.clone(),
    };

    match album.release_date_precision.as_str() {
        "year" => {
            let year: i32 = album.release_date.parse().map_err(|_| parse_err())?;
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(parse_err)
        }
        "month" => {
            let mut parts = album.release_date.splitn(2, '-');
            let year: i32 = parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(parse_err)?;
            let month: u32 = parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(parse_err)?;
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(parse_err)
        }
        "day" => {
            NaiveDate::parse_from_str(&album.release_date, "%Y-%m-%d").map_err(|_| parse_err())
        }
        _ => Err(parse_err()),
    }
}

/// Runs the full filtering pass over the artist→albums mapping.
///
/// Artists are visited in input order and albums in their per-artist order,
/// so when two albums share a name the first one encountered wins, no matter
/// how their ids differ. Name comparison uses
/// [`heuristics::normalize_name`], so casing and punctuation variants of the
/// same title (`Title: Live` vs `Title - Live`) count as duplicates. A name
/// only counts as seen once its release was actually accepted; a region- or
/// type-rejected album does not shadow a later release of the same name.
///
/// The result is sorted by resolved date, most recent first. The sort is
/// stable, so same-date releases keep their encounter order.
pub fn filter_releases(
    artists: &[ArtistReleases],
    cfg: &FilterConfig,
) -> Result<Vec<Release>, FilterError> {
    let mut accepted: Vec<Release> = Vec::new();
    let mut names_seen: HashSet<String> = HashSet::new();

    for entry in artists {
        for album in &entry.albums {
            if !album.available_markets.iter().any(|m| m == &cfg.region) {
                continue;
            }

            if !cfg.allowed.contains_tag(&album.album_type) {
                continue;
            }

            let date = resolve_release_date(album)?;
            let day_delta = (cfg.today - date).num_days();
            if !cfg.age_window.admits(day_delta, cfg.max_age_days) {
                continue;
            }

            if names_seen.insert(heuristics::normalize_name(&album.name)) {
                accepted.push(Release {
                    album: album.clone(),
                    date,
                });
            }
        }
    }

    accepted.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(accepted)
}
