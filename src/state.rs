//! Shared handler state.

use std::sync::Arc;

use crate::services::AccountService;

/// State injected into every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountService>,
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountService>) -> Self {
        Self { account_service }
    }
}
