//! Name-based classification of releases.
//!
//! Streaming catalogs are full of entries that are technically new but
//! rarely interesting on a radar: remasters and anniversary editions, live
//! cuts, soundtracks, remix packages. These are recognizable only by their
//! names, so this module keeps the pattern lists and a small classifier the
//! radar command runs over raw albums before the actual filtering pass.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_RELEASE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bdeluxe\b").unwrap(),
        Regex::new(r"\bremaster(ed)?\b").unwrap(),
        Regex::new(r"\banniversary\b").unwrap(),
        Regex::new(r"\b\d{1,2}\s*year\s*(anniversary|edition)\b").unwrap(),
        Regex::new(r"\bspecial\s*edition\b").unwrap(),
        Regex::new(r"\bexpanded(\s*edition)?\b").unwrap(),
        Regex::new(r"\breissue\b").unwrap(),
        Regex::new(r"\bbonus\b").unwrap(),
        Regex::new(r"\bedition\b").unwrap(),
    ]
});

static LIVE_RECORDING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\blive at\b").unwrap(),
        Regex::new(r"\bin concert\b").unwrap(),
        Regex::new(r"\blive recording\b").unwrap(),
        Regex::new(r"\brecorded live\b").unwrap(),
        Regex::new(r"\blive version\b").unwrap(),
        Regex::new(r"\blive performance\b").unwrap(),
        Regex::new(r"\blive from\b").unwrap(),
        Regex::new(r"\blive in\b").unwrap(),
        Regex::new(r"\blive on\b").unwrap(),
        Regex::new(r"\bunplugged\b").unwrap(),
        Regex::new(r"\blive\b").unwrap(),
    ]
});

static SOUNDTRACK_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| vec![Regex::new(r"\bsoundtrack\b").unwrap(), Regex::new(r"\bost\b").unwrap()]);

static REMIX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bremix(ed)?\b").unwrap(),
        Regex::new(r"\brework\b").unwrap(),
        Regex::new(r"\bremake\b").unwrap(),
    ]
});

/// Normalizes a release name for comparison: lowercase, brackets stripped,
/// dashes and colons flattened to spaces, whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_space = true;
    for c in name.chars() {
        let mapped = match c {
            '(' | ')' | '[' | ']' => continue,
            '-' | ':' => ' ',
            c if c.is_whitespace() => ' ',
            c => c.to_ascii_lowercase(),
        };
        if mapped == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(mapped);
            prev_space = false;
        }
    }
    out.trim_end().to_string()
}

pub fn is_re_release(name: &str) -> bool {
    let normalized = normalize_name(name);
    RE_RELEASE_PATTERNS.iter().any(|p| p.is_match(&normalized))
}

pub fn is_live_recording(name: &str) -> bool {
    let normalized = normalize_name(name);
    LIVE_RECORDING_PATTERNS
        .iter()
        .any(|p| p.is_match(&normalized))
}

pub fn is_soundtrack(name: &str) -> bool {
    let normalized = normalize_name(name);
    SOUNDTRACK_PATTERNS.iter().any(|p| p.is_match(&normalized))
}

pub fn is_remix(name: &str) -> bool {
    let normalized = normalize_name(name);
    REMIX_PATTERNS.iter().any(|p| p.is_match(&normalized))
}

/// Which name-classified categories to keep in the output. Everything is
/// dropped by default; each flag re-admits one category.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFilters {
    pub keep_re_releases: bool,
    pub keep_live_recordings: bool,
    pub keep_soundtracks: bool,
    pub keep_remixes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    ReRelease,
    LiveRecording,
    Soundtrack,
    Remix,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DropReason::ReRelease => "re-release",
            DropReason::LiveRecording => "live recording",
            DropReason::Soundtrack => "soundtrack",
            DropReason::Remix => "remix",
        };
        write!(f, "{}", label)
    }
}

impl NameFilters {
    /// Keep everything regardless of name.
    pub fn keep_all() -> Self {
        NameFilters {
            keep_re_releases: true,
            keep_live_recordings: true,
            keep_soundtracks: true,
            keep_remixes: true,
        }
    }

    /// Returns why a name should be dropped, or `None` to keep it.
    /// Categories are checked in a fixed order, so a "Live at ... (Remastered)"
    /// release reports as a re-release.
    pub fn classify(&self, name: &str) -> Option<DropReason> {
        if !self.keep_re_releases && is_re_release(name) {
            return Some(DropReason::ReRelease);
        }
        if !self.keep_live_recordings && is_live_recording(name) {
            return Some(DropReason::LiveRecording);
        }
        if !self.keep_soundtracks && is_soundtrack(name) {
            return Some(DropReason::Soundtrack);
        }
        if !self.keep_remixes && is_remix(name) {
            return Some(DropReason::Remix);
        }
        None
    }
}
