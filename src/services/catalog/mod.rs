/// Catalog acquisition
///
/// A `CatalogSource` yields the raw upstream catalog. `CatalogService` turns
/// whatever the source produced (or failed to produce) into a non-empty list
/// of normalized products, substituting the fallback catalog when needed.
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{error::FetchError, models::RawCatalog};

pub mod fallback;
pub mod normalizer;
pub mod retry;
pub mod service;
pub mod tables;
pub mod upstream;

pub use normalizer::CatalogNormalizer;
pub use retry::RetryPolicy;
pub use service::CatalogService;
pub use tables::NormalizationTables;
pub use upstream::HttpCatalogSource;

/// Trait for raw catalog sources
///
/// The network-backed implementation retries internally. Implementations must
/// stop promptly once `cancel` fires or `deadline` passes.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog
    async fn fetch(
        &self,
        deadline: Instant,
        cancel: &CancellationToken,
    ) -> Result<RawCatalog, FetchError>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
