//! Application state shared across handlers.

use std::sync::Arc;

use showroom_core::model::ProductKind;

use crate::catalog::{CatalogStore, DataSource, DocumentSource, SourceError};
use crate::config::{PageConfig, StorefrontConfig};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the memoized catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
}

impl AppState {
    /// Create a new application state reading the catalog from the
    /// configured data source.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source location is invalid or the HTTP
    /// client cannot be built. The document itself is not fetched here.
    pub fn new(config: StorefrontConfig) -> Result<Self, SourceError> {
        let source = DataSource::parse(&config.catalog.data_source, config.catalog.fetch_timeout)?;
        tracing::debug!(
            location = source.location(),
            remote = source.is_remote(),
            "Catalog source configured"
        );
        Ok(Self::with_catalog(config, CatalogStore::new(source)))
    }

    /// Create a state around an existing catalog store.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    #[must_use]
    pub fn pages(&self) -> PageConfig {
        self.inner.config.pages
    }

    #[must_use]
    pub fn product_kind(&self) -> ProductKind {
        self.inner.config.catalog.product_kind
    }
}
