use std::collections::HashSet;

use chrono::NaiveDate;
use radarcli::filter::{
    AgeWindow, FilterConfig, FilterError, filter_releases, resolve_release_date,
};
use radarcli::heuristics::normalize_name;
use radarcli::types::{Album, AlbumArtist, Artist, ArtistReleases};
use radarcli::utils::{ReleaseKind, ReleaseKinds};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn album(id: &str, name: &str, release_date: &str, precision: &str, kind: &str) -> Album {
    Album {
        id: id.to_string(),
        uri: format!("spotify:album:{}", id),
        name: name.to_string(),
        album_type: kind.to_string(),
        release_date: release_date.to_string(),
        release_date_precision: precision.to_string(),
        available_markets: vec!["CA".to_string(), "US".to_string()],
        artists: vec![AlbumArtist {
            id: format!("{}_artist", id),
            name: "Artist".to_string(),
        }],
    }
}

fn day_album(id: &str, name: &str, release_date: &str) -> Album {
    album(id, name, release_date, "day", "album")
}

fn entry(artist_id: &str, albums: Vec<Album>) -> ArtistReleases {
    ArtistReleases {
        artist: Artist {
            id: artist_id.to_string(),
            name: format!("{} name", artist_id),
            genres: Vec::new(),
        },
        albums,
    }
}

fn config(today: NaiveDate) -> FilterConfig {
    FilterConfig {
        region: "CA".to_string(),
        allowed: ReleaseKinds::of(&[ReleaseKind::Album, ReleaseKind::Single]),
        max_age_days: 60,
        today,
        age_window: AgeWindow::Signed,
    }
}

#[test]
fn test_region_excluded_release_never_appears() {
    let mut foreign = day_album("a1", "Foreign Only", "2024-03-01");
    foreign.available_markets = vec!["DE".to_string(), "FR".to_string()];

    let artists = vec![entry(
        "artist1",
        vec![foreign, day_album("a2", "Local", "2024-03-01")],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.name, "Local");
}

#[test]
fn test_empty_market_set_is_excluded() {
    let mut unlisted = day_album("a1", "Nowhere", "2024-03-01");
    unlisted.available_markets = Vec::new();

    let artists = vec![entry("artist1", vec![unlisted])];
    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert!(releases.is_empty());
}

#[test]
fn test_type_excluded_release_never_appears() {
    let artists = vec![entry(
        "artist1",
        vec![
            album("a1", "Compiled", "2024-03-01", "day", "compilation"),
            album("a2", "Short One", "2024-03-02", "day", "single"),
            album("a3", "Long One", "2024-03-03", "day", "album"),
        ],
    )];

    // singles allowed by default config
    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    let names: Vec<&str> = releases.iter().map(|r| r.album.name.as_str()).collect();
    assert_eq!(names, vec!["Long One", "Short One"]);

    // album-only set drops the single too, regardless of date or region
    let mut cfg = config(date(2024, 3, 10));
    cfg.allowed = ReleaseKinds::of(&[ReleaseKind::Album]);
    let releases = filter_releases(&artists, &cfg).unwrap();
    let names: Vec<&str> = releases.iter().map(|r| r.album.name.as_str()).collect();
    assert_eq!(names, vec!["Long One"]);
}

#[test]
fn test_unknown_type_tag_is_excluded() {
    let artists = vec![entry(
        "artist1",
        vec![album("a1", "Oddity", "2024-03-01", "day", "broadcast")],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    assert!(releases.is_empty());
}

#[test]
fn test_recency_window_bounds() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Nine Days Old", "2024-03-01"),
            day_album("a2", "Sixty-Nine Days Old", "2024-01-01"),
        ],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.name, "Nine Days Old");
}

#[test]
fn test_window_boundary_is_exclusive() {
    // exactly max_age_days old fails the strict comparison
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Fifty-Nine Days", "2024-01-11"),
            day_album("a2", "Sixty Days", "2024-01-10"),
        ],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.name, "Fifty-Nine Days");
}

#[test]
fn test_signed_window_admits_any_future_date() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Near Future", "2024-03-20"),
            day_album("a2", "Far Future", "2024-06-01"),
        ],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    let names: Vec<&str> = releases.iter().map(|r| r.album.name.as_str()).collect();

    // negative day deltas always pass the signed comparison
    assert_eq!(names, vec!["Far Future", "Near Future"]);
}

#[test]
fn test_absolute_window_bounds_future_dates() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Near Future", "2024-03-20"),
            day_album("a2", "Far Future", "2024-06-01"),
        ],
    )];

    let mut cfg = config(date(2024, 3, 10));
    cfg.age_window = AgeWindow::Absolute;
    let releases = filter_releases(&artists, &cfg).unwrap();
    let names: Vec<&str> = releases.iter().map(|r| r.album.name.as_str()).collect();

    assert_eq!(names, vec!["Near Future"]);
}

#[test]
fn test_absolute_window_keeps_past_behavior() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Recent", "2024-03-01"),
            day_album("a2", "Old", "2024-01-01"),
        ],
    )];

    let mut cfg = config(date(2024, 3, 10));
    cfg.age_window = AgeWindow::Absolute;
    let releases = filter_releases(&artists, &cfg).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.name, "Recent");
}

#[test]
fn test_year_precision_resolves_to_january_first() {
    let a = album("a1", "Year Only", "2023", "year", "album");
    assert_eq!(resolve_release_date(&a).unwrap(), date(2023, 1, 1));
}

#[test]
fn test_month_precision_resolves_to_first_of_month() {
    let a = album("a1", "Month Only", "2023-05", "month", "album");
    assert_eq!(resolve_release_date(&a).unwrap(), date(2023, 5, 1));
}

#[test]
fn test_day_precision_parses_iso_date() {
    let a = day_album("a1", "Full Date", "2023-05-17");
    assert_eq!(resolve_release_date(&a).unwrap(), date(2023, 5, 17));
}

#[test]
fn test_malformed_date_fails_the_pass() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Fine", "2024-03-01"),
            day_album("a2", "Broken", "not-a-date"),
        ],
    )];

    let err = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap_err();
    match err {
        FilterError::DateParse { album, raw, .. } => {
            assert_eq!(album, "Broken");
            assert_eq!(raw, "not-a-date");
        }
    }
}

#[test]
fn test_unknown_precision_fails_the_pass() {
    let a = album("a1", "Strange", "2024-03-01", "decade", "album");
    assert!(resolve_release_date(&a).is_err());

    let artists = vec![entry("artist1", vec![a])];
    assert!(filter_releases(&artists, &config(date(2024, 3, 10))).is_err());
}

#[test]
fn test_invalid_month_value_fails() {
    let a = album("a1", "Bad Month", "2023-13", "month", "album");
    assert!(resolve_release_date(&a).is_err());
}

#[test]
fn test_duplicate_names_first_encountered_wins() {
    // same name, different ids, spread over two artists
    let artists = vec![
        entry("artist1", vec![day_album("a1", "Shared Name", "2024-03-01")]),
        entry("artist2", vec![day_album("b1", "Shared Name", "2024-03-05")]),
    ];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.id, "a1");
}

#[test]
fn test_normalized_variants_count_as_duplicates() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Great Hits: Part 1", "2024-03-01"),
            day_album("a2", "great hits - part 1", "2024-03-05"),
        ],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.id, "a1");
}

#[test]
fn test_rejected_occurrence_does_not_shadow_later_duplicate() {
    // the first occurrence fails the region check, so the name is not
    // marked seen and the second occurrence is accepted
    let mut foreign = day_album("a1", "Shared Name", "2024-03-01");
    foreign.available_markets = vec!["DE".to_string()];

    let artists = vec![
        entry("artist1", vec![foreign]),
        entry("artist2", vec![day_album("b1", "Shared Name", "2024-03-05")]),
    ];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].album.id, "b1");
}

#[test]
fn test_output_sorted_most_recent_first() {
    let artists = vec![entry(
        "artist1",
        vec![
            day_album("a1", "Oldest", "2024-02-01"),
            day_album("a2", "Newest", "2024-03-08"),
            day_album("a3", "Middle", "2024-02-20"),
        ],
    )];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    let names: Vec<&str> = releases.iter().map(|r| r.album.name.as_str()).collect();

    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn test_sort_is_stable_for_equal_dates() {
    let artists = vec![
        entry("artist1", vec![day_album("a1", "First Seen", "2024-03-01")]),
        entry("artist2", vec![day_album("b1", "Second Seen", "2024-03-01")]),
    ];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    let ids: Vec<&str> = releases.iter().map(|r| r.album.id.as_str()).collect();

    assert_eq!(ids, vec!["a1", "b1"]);
}

#[test]
fn test_no_two_outputs_share_a_normalized_name() {
    let artists = vec![
        entry(
            "artist1",
            vec![
                day_album("a1", "Alpha", "2024-03-01"),
                day_album("a2", "Beta", "2024-03-02"),
                day_album("a3", "ALPHA", "2024-03-03"),
            ],
        ),
        entry(
            "artist2",
            vec![
                day_album("b1", "Beta", "2024-03-04"),
                day_album("b2", "Gamma", "2024-03-05"),
            ],
        ),
    ];

    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();

    let names: HashSet<String> = releases
        .iter()
        .map(|r| normalize_name(&r.album.name))
        .collect();
    assert_eq!(names.len(), releases.len());
    assert_eq!(releases.len(), 3);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let releases = filter_releases(&[], &config(date(2024, 3, 10))).unwrap();
    assert!(releases.is_empty());

    let artists = vec![entry("artist1", Vec::new())];
    let releases = filter_releases(&artists, &config(date(2024, 3, 10))).unwrap();
    assert!(releases.is_empty());
}
