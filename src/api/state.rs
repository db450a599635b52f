use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::services::CatalogService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    /// Cancelled when the server begins shutting down
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(catalog: CatalogService, shutdown: CancellationToken) -> Self {
        Self {
            catalog: Arc::new(catalog),
            shutdown,
        }
    }

    /// Token for one request's upstream work, cancelled on shutdown
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
