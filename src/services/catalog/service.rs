use std::{collections::HashSet, sync::Arc, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{FilterCriteria, Product, RawCatalog, RawGame},
};

use super::{fallback::fallback_catalog, CatalogNormalizer, CatalogSource};

/// Fetch-or-fallback access to the lottery catalog.
///
/// Every call fetches afresh; nothing is cached between requests. Upstream
/// failures never escape: they are logged and replaced by the fallback
/// catalog, so listing always yields at least one product.
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    normalizer: CatalogNormalizer,
    fetch_deadline: Duration,
}

impl CatalogService {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        normalizer: CatalogNormalizer,
        fetch_deadline: Duration,
    ) -> Self {
        Self {
            source,
            normalizer,
            fetch_deadline,
        }
    }

    /// All products, from upstream when usable, otherwise the fallback set
    #[instrument(skip_all, fields(source = self.source.name()))]
    pub async fn list_products(&self, cancel: &CancellationToken) -> Vec<Product> {
        let deadline = Instant::now() + self.fetch_deadline;

        let raw = match self.source.fetch(deadline, cancel).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog upstream unavailable, using fallback catalog");
                return fallback_catalog();
            }
        };

        let products = self.normalize_catalog(&raw);
        if products.is_empty() {
            tracing::warn!(
                games = raw.games.len(),
                "Catalog upstream returned no usable games, using fallback catalog"
            );
            return fallback_catalog();
        }

        tracing::info!(products = products.len(), "Loaded catalog from upstream");
        products
    }

    pub async fn active_products(&self, cancel: &CancellationToken) -> Vec<Product> {
        self.list_products(cancel)
            .await
            .into_iter()
            .filter(|p| p.is_active)
            .collect()
    }

    pub async fn get_product(&self, id: &str, cancel: &CancellationToken) -> AppResult<Product> {
        self.list_products(cancel)
            .await
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Lottery with ID {} not found", id)))
    }

    /// Products satisfying every provided filter
    pub async fn filter_products(
        &self,
        criteria: &FilterCriteria,
        cancel: &CancellationToken,
    ) -> Vec<Product> {
        self.list_products(cancel)
            .await
            .into_iter()
            .filter(|p| criteria.matches(p))
            .collect()
    }

    /// Normalizes usable records, keeping the first occurrence of each code
    fn normalize_catalog(&self, raw: &RawCatalog) -> Vec<Product> {
        let mut seen = HashSet::new();

        raw.games
            .iter()
            .filter(|game| {
                if !is_usable(game) {
                    tracing::warn!(code = %game.name, "Skipping unusable catalog record");
                    return false;
                }
                if !seen.insert(game.name.as_str()) {
                    tracing::warn!(code = %game.name, "Skipping duplicate catalog record");
                    return false;
                }
                true
            })
            .map(|game| self.normalizer.normalize(game))
            .collect()
    }
}

fn is_usable(game: &RawGame) -> bool {
    !game.name.trim().is_empty() && game.ticket_price >= 0 && game.jackpot >= 0
}
