//! Daily snapshot cache.
//!
//! One JSON file per (user, calendar date) holding the full artist→albums
//! snapshot fetched that day. The date is part of the key, so a snapshot is
//! implicitly valid until local midnight: the next day the lookup misses and
//! the radar refetches. Old files are pruned once they fall out of the
//! recency window entirely.

use std::{fs, io::Error, path::PathBuf};

use chrono::NaiveDate;

use crate::types::ArtistReleases;

#[derive(Debug)]
pub enum SnapshotError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SnapshotError {
    fn from(err: Error) -> Self {
        SnapshotError::IoError(err)
    }
}

pub struct SnapshotManager {
    user: String,
    date: NaiveDate,
    artists: Vec<ArtistReleases>,
}

impl SnapshotManager {
    pub fn new(user: &str, date: NaiveDate, artists: Option<Vec<ArtistReleases>>) -> Self {
        Self {
            user: user.to_string(),
            date,
            artists: artists.unwrap_or_default(),
        }
    }

    pub async fn load_from_cache(&self) -> Result<Self, SnapshotError> {
        let path = self.snapshot_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(SnapshotError::IoError)?;
        let artists = serde_json::from_str(&content).map_err(SnapshotError::SerdeError)?;
        Ok(Self {
            user: self.user.clone(),
            date: self.date,
            artists,
        })
    }

    pub async fn save_to_cache(&self) -> Result<(), SnapshotError> {
        let path = self.snapshot_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SnapshotError::IoError)?;
        }

        let json =
            serde_json::to_string_pretty(&self.artists).map_err(SnapshotError::SerdeError)?;
        async_fs::write(&path, json)
            .await
            .map_err(SnapshotError::IoError)
    }

    pub fn artists(&self) -> Vec<ArtistReleases> {
        self.artists.clone()
    }

    /// Most recent snapshot date on disk for this user, if any.
    pub fn latest_date(user: &str) -> Option<NaiveDate> {
        let entries = fs::read_dir(Self::cache_dir(user)).ok()?;
        entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name();
                let stem = name.to_str()?.strip_suffix(".json")?;
                NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
            })
            .max()
    }

    /// Deletes snapshot files older than `max_age_days` before `today`.
    /// Returns how many files were removed.
    pub fn prune_stale(user: &str, today: NaiveDate, max_age_days: i64) -> usize {
        let Ok(entries) = fs::read_dir(Self::cache_dir(user)) else {
            return 0;
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(date) = name
                .to_str()
                .and_then(|n| n.strip_suffix(".json"))
                .and_then(|stem| NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok())
            else {
                continue;
            };

            if (today - date).num_days() > max_age_days && fs::remove_file(entry.path()).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    fn snapshot_path(&self) -> PathBuf {
        let mut path = Self::cache_dir(&self.user);
        path.push(format!("{}.json", self.date.format("%Y-%m-%d")));
        path
    }

    fn cache_dir(user: &str) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("radarcli/cache/{user}"));
        path
    }
}
