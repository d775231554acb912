use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, error, spotify, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    if let Err(e) = config::ensure() {
        error!("{}", e);
    }
    spotify::auth::auth(shared_state).await;
}
