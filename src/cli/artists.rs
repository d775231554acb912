use chrono::Utc;
use tabled::Table;

use crate::{
    config, error,
    management::SnapshotManager,
    success,
    types::{Artist, ArtistTableRow},
    warning,
};

use super::radar::refresh_snapshot;

pub async fn list_artists(search: Option<String>) {
    if let Err(e) = config::ensure() {
        error!("{}", e);
    }
    let user = config::spotify_user();

    let Some(date) = SnapshotManager::latest_date(&user) else {
        warning!("No snapshot yet. Run radarcli radar or radarcli artists update.");
        return;
    };

    match SnapshotManager::new(&user, date, None).load_from_cache().await {
        Ok(snapshot) => {
            let mut artists: Vec<Artist> = snapshot
                .artists()
                .into_iter()
                .map(|entry| entry.artist)
                .collect();
            artists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            if let Some(artist_search) = search {
                let search_term = artist_search.to_lowercase();
                artists.retain(|a| a.name.to_lowercase().contains(&search_term));
            }

            let table_rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    genres: a
                        .genres
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(","),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load artists. Err: {:?}", e),
    }
}

pub async fn update_artists() {
    if let Err(e) = config::ensure() {
        error!("{}", e);
    }
    let user = config::spotify_user();
    let today = Utc::now().date_naive();

    let artists = refresh_snapshot(&user, today).await;
    success!("Snapshot refreshed with {} artists.", artists.len());
}
