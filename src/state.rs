use std::sync::{Arc, Mutex};

use crate::store::TodoStore;

/// The store itself is unsynchronized, so the shared handle carries the mutex
/// that serializes access from axum's worker threads.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
