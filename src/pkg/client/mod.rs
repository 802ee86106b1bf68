pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;
pub mod uispec;

use crate::{conf::Settings, pkg::internal::storage::JsonFileStore, prelude::Result};
use state::AppState;

pub fn open(settings: &Settings) -> Result<AppState> {
    let store = JsonFileStore::open(&settings.store_path)?;
    tracing::debug!("opened store at {}", &settings.store_path);
    AppState::open(Box::new(store), settings.auto_verify_email, &settings.base_url)
}
