//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream auth provider, or `None` when none is configured.

use std::sync::Arc;

use crate::services::auth::AuthProvider;

#[derive(Clone)]
pub struct AppState {
    pub auth: Option<Arc<dyn AuthProvider>>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Option<Arc<dyn AuthProvider>>) -> Self {
        Self { auth }
    }
}
