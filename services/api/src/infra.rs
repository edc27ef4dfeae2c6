use metrics_exporter_prometheus::PrometheusHandle;
use rental_listings::listings::{CatalogError, ListingCatalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads listings from `source`, or the built-in sample catalog when absent.
pub(crate) fn load_catalog(source: Option<&Path>) -> Result<ListingCatalog, CatalogError> {
    match source {
        Some(path) => ListingCatalog::from_path(path),
        None => {
            let catalog = ListingCatalog::sample();
            info!(listings = catalog.len(), "using sample listing catalog");
            Ok(catalog)
        }
    }
}
