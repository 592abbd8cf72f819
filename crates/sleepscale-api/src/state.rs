use std::sync::Arc;

use jiff::tz::Offset;
use sleepscale_storage::store::RecordStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub admin_token: Option<Arc<str>>,
    pub utc_offset: Offset,
}

impl AppState {
    pub fn new(store: RecordStore, admin_token: Option<String>, utc_offset: Offset) -> Self {
        Self {
            store,
            admin_token: admin_token.map(Arc::from),
            utc_offset,
        }
    }
}
