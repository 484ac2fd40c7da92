use crate::hub::ChatHub;

/// Shared application state
pub struct AppState {
    pub hub: ChatHub,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            hub: ChatHub::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
