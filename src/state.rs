use std::sync::Arc;

use crate::store::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LinkStore>,
}

impl AppState {
    pub fn new(store: LinkStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
