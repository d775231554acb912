//! Display transforms and table rows.
//!
//! Everything here is cosmetic and runs after filtering: deriving the link
//! column, truncating long names, and mapping accepted releases onto
//! [`ReleaseTableRow`]s for `tabled`.

use crate::types::{Release, ReleaseTableRow};

pub const ALBUM_URL_BASE: &str = "https://open.spotify.com/album/";

/// Maximum display width of the name column before truncation kicks in.
const NAME_WIDTH: usize = 40;
const ELLIPSIS: &str = "...";

/// The link cell: either the raw URI (searchable by copy-paste into the
/// desktop client) or a clickable web URL built from the URI's id segment.
pub fn album_link(uri: &str, show_urls: bool) -> String {
    if show_urls {
        let id = uri.rsplit(':').next().unwrap_or(uri);
        format!("{}{}", ALBUM_URL_BASE, id)
    } else {
        uri.to_string()
    }
}

/// Truncates names longer than 40 characters to 37 plus an ellipsis marker,
/// counting characters rather than bytes.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let kept: String = name.chars().take(NAME_WIDTH - ELLIPSIS.len()).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        name.to_string()
    }
}

/// Maps sorted releases onto table rows. Keeps the input order; sorting is
/// the filter's job.
pub fn to_rows(releases: &[Release], show_urls: bool) -> Vec<ReleaseTableRow> {
    releases
        .iter()
        .map(|release| ReleaseTableRow {
            kind: release.album.album_type.clone(),
            date: release.album.release_date.clone(),
            link: album_link(&release.album.uri, show_urls),
            artist: release
                .album
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            name: truncate_name(&release.album.name),
        })
        .collect()
}
