use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    /// Base URL handed to the client scripts for the placeholder API.
    /// Empty means same-origin.
    pub api_base: String,
}

impl AppState {
    pub fn new(store: ContentStore, api_base: String) -> Self {
        Self { store, api_base }
    }
}
