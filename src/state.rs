use std::sync::Arc;

use crate::config::AppConfig;
use crate::gallery::Catalog;
use crate::metrics::Metrics;
use crate::types::{Category, MediaFile};

/// The shared application state.
///
/// Cheap to clone; handed to every handler through Axum's `State` extractor.
/// Nothing in here is mutated after startup except the atomic metrics.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Galleries resolved from the configuration.
    pub catalog: Arc<Catalog>,
    /// The application metrics.
    pub metrics: Metrics,
}

impl AppState {
    /// Builds the state, failing when a gallery's exclude patterns or the
    /// configured layout rows are invalid.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::from_config(&config)?;
        Ok(Self { config: Arc::new(config), catalog: Arc::new(catalog), metrics: Metrics::new() })
    }

    /// Reads a gallery folder on the blocking pool.
    ///
    /// Never fails: an unreadable folder or a panicked task is logged,
    /// counted and served as an empty listing.
    pub async fn list(&self, category: Category) -> Vec<MediaFile> {
        let catalog = self.catalog.clone();
        let result = tokio::task::spawn_blocking(move || catalog.gallery(category).try_list()).await;

        let files = match result {
            Ok(Ok(files)) => files,
            Ok(Err(e)) => {
                tracing::warn!("Listing {} failed, serving empty list: {}", category, e);
                self.metrics.inc_listing_failures();
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Listing task for {} failed: {}", category, e);
                self.metrics.inc_listing_failures();
                Vec::new()
            }
        };

        self.metrics.inc_listings_served();
        self.metrics.add_files(files.len() as u64);
        files
    }
}
