use std::time::Duration;

use chrono::{NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    filter::{AgeWindow, FilterConfig, filter_releases},
    heuristics::NameFilters,
    info,
    management::{SnapshotManager, TokenManager},
    render, spotify, success,
    types::ArtistReleases,
    utils::{self, ReleaseKind, ReleaseKinds},
    warning,
};

/// Snapshots older than this are deleted after a refresh.
const SNAPSHOT_RETENTION_DAYS: i64 = 60;

/// Everything the radar command needs, assembled from the CLI flags.
pub struct RadarRequest {
    pub region: String,
    pub max_age_days: u32,
    pub hide_eps: bool,
    pub show_urls: bool,
    pub reference_date: Option<String>,
    pub absolute_window: bool,
    pub types: Option<ReleaseKinds>,
    pub no_cache: bool,
    pub name_filters: NameFilters,
    pub log_filtered: bool,
}

pub async fn radar(req: RadarRequest) {
    if let Err(e) = config::ensure() {
        error!("{}", e);
    }

    // The reference date anchors the recency window; the snapshot cache is
    // always keyed by the actual calendar date.
    let today = utils::get_date_from_string(req.reference_date.clone());
    let snapshot_date = Utc::now().date_naive();
    let user = config::spotify_user();

    let artists = load_snapshot(&user, snapshot_date, req.no_cache).await;

    // Pre-pass: drop names the heuristics classify away, keeping a record
    // for --log-filtered.
    let mut dropped: Vec<String> = Vec::new();
    let artists: Vec<ArtistReleases> = artists
        .into_iter()
        .map(|mut entry| {
            entry.albums.retain(|album| {
                match req.name_filters.classify(&album.name) {
                    Some(reason) => {
                        dropped.push(format!(
                            "{} - {} ({})",
                            entry.artist.name, album.name, reason
                        ));
                        false
                    }
                    None => true,
                }
            });
            entry
        })
        .collect();

    let mut allowed = req
        .types
        .clone()
        .unwrap_or_else(|| ReleaseKinds::of(&[ReleaseKind::Album, ReleaseKind::Single]));
    if req.hide_eps {
        allowed.remove(ReleaseKind::Single);
    }

    let cfg = FilterConfig {
        region: req.region.clone(),
        allowed,
        max_age_days: req.max_age_days as i64,
        today,
        age_window: if req.absolute_window {
            AgeWindow::Absolute
        } else {
            AgeWindow::Signed
        },
    };

    let releases = match filter_releases(&artists, &cfg) {
        Ok(releases) => releases,
        Err(e) => error!("Release filtering failed: {}", e),
    };

    if releases.is_empty() {
        info!(
            "No releases from followed artists within the past {} days.",
            req.max_age_days
        );
    } else {
        let rows = render::to_rows(&releases, req.show_urls);
        let table = Table::new(rows);
        println!(
            "\nNew releases from followed artists within the past {} days:\n\n{}",
            req.max_age_days, table
        );
    }

    if req.log_filtered && !dropped.is_empty() {
        info!("Dropped by name heuristics:");
        for line in &dropped {
            info!("  {}", line);
        }
    }
}

async fn load_snapshot(user: &str, date: NaiveDate, no_cache: bool) -> Vec<ArtistReleases> {
    if !no_cache {
        if let Ok(snapshot) = SnapshotManager::new(user, date, None)
            .load_from_cache()
            .await
        {
            info!("Using today's snapshot from cache.");
            return snapshot.artists();
        }
    }

    refresh_snapshot(user, date).await
}

/// Fetches the full artist→albums snapshot from the API and caches it under
/// the given date. Also used by `artists update` to pre-warm the cache.
pub(super) async fn refresh_snapshot(user: &str, date: NaiveDate) -> Vec<ArtistReleases> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run radarcli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching followed artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let followed = match spotify::artists::fetch_all_followed(&mut token_mgr).await {
        Ok(artists) => artists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch followed artists: {}", e);
        }
    };

    pb.finish_and_clear();
    success!("Fetched {} followed artists.", followed.len());

    // Always request the superset of kinds so a cached snapshot serves any
    // combination of display flags later the same day.
    let kinds = ReleaseKinds::of(&[
        ReleaseKind::Album,
        ReleaseKind::Single,
        ReleaseKind::Compilation,
    ]);

    let pb = ProgressBar::new(followed.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut artists: Vec<ArtistReleases> = Vec::with_capacity(followed.len());
    for artist in followed {
        pb.set_message(artist.name.clone());

        let albums =
            match spotify::albums::fetch_with_retry(&artist.id, &mut token_mgr, &kinds).await {
                Ok(albums) => albums,
                Err(e) => {
                    // isolate the failure: this artist contributes nothing,
                    // the scan goes on
                    warning!("No albums for artist {}: {}", artist.name, e);
                    Vec::new()
                }
            };

        artists.push(ArtistReleases { artist, albums });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let snapshot = SnapshotManager::new(user, date, Some(artists.clone()));
    match snapshot.save_to_cache().await {
        Ok(_) => success!("Snapshot cached for {}.", date),
        Err(e) => warning!("Cannot cache snapshot: {:?}", e),
    }

    let pruned = SnapshotManager::prune_stale(user, date, SNAPSHOT_RETENTION_DAYS);
    if pruned > 0 {
        info!("Pruned {} stale snapshot file(s).", pruned);
    }

    artists
}
