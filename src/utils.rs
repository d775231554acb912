use std::collections::BTreeSet;
use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{NaiveDate, Utc};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn get_date_from_string(date: Option<String>) -> NaiveDate {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive()),
        None => Utc::now().date_naive(),
    }
}

/// A category of release as the API tags it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKind {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl ReleaseKind {
    pub const ALL: [ReleaseKind; 4] = [
        ReleaseKind::Album,
        ReleaseKind::Single,
        ReleaseKind::AppearsOn,
        ReleaseKind::Compilation,
    ];

    /// Maps a wire tag (`album_type` / `include_groups` value) to a kind.
    pub fn from_tag(tag: &str) -> Option<ReleaseKind> {
        match tag {
            "album" => Some(ReleaseKind::Album),
            "single" => Some(ReleaseKind::Single),
            "appears_on" => Some(ReleaseKind::AppearsOn),
            "compilation" => Some(ReleaseKind::Compilation),
            _ => None,
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ReleaseKind::Album => "album",
            ReleaseKind::Single => "single",
            ReleaseKind::AppearsOn => "appears_on",
            ReleaseKind::Compilation => "compilation",
        };
        write!(f, "{}", tag)
    }
}

/// An ordered set of release kinds. Doubles as the `include_groups` request
/// parameter (via `Display`) and as the type-inclusion set of the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseKinds(pub BTreeSet<ReleaseKind>);

impl ReleaseKinds {
    pub fn of(kinds: &[ReleaseKind]) -> Self {
        ReleaseKinds(kinds.iter().copied().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = ReleaseKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: ReleaseKind) -> bool {
        self.0.contains(&kind)
    }

    /// Type-set membership for a raw wire tag. Unknown tags are not members.
    pub fn contains_tag(&self, tag: &str) -> bool {
        ReleaseKind::from_tag(tag).map_or(false, |k| self.0.contains(&k))
    }

    pub fn remove(&mut self, kind: ReleaseKind) {
        self.0.remove(&kind);
    }
}

impl Default for ReleaseKinds {
    fn default() -> Self {
        ReleaseKinds::of(&[ReleaseKind::Album])
    }
}

impl fmt::Display for ReleaseKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self.iter().map(|k| k.to_string()).collect();
        write!(f, "{}", tags.join(","))
    }
}

/// Parses a comma-separated list of release kinds, e.g. `album,single`.
/// `all` expands to every kind; `appears-on` is accepted for `appears_on`.
pub fn parse_release_kinds(input: &str) -> Result<ReleaseKinds, String> {
    if input.trim().is_empty() {
        return Err("release kind list cannot be empty".to_string());
    }

    let mut kinds = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim().to_lowercase().replace('-', "_");
        if segment.is_empty() {
            return Err(format!("empty segment in release kind list '{}'", input));
        }

        if segment == "all" {
            kinds.extend(ReleaseKind::ALL);
            continue;
        }

        match ReleaseKind::from_tag(&segment) {
            Some(kind) => {
                kinds.insert(kind);
            }
            None => {
                return Err(format!(
                    "invalid value '{}': expected album, single, appears-on, compilation or all",
                    segment
                ));
            }
        }
    }

    Ok(ReleaseKinds(kinds))
}
