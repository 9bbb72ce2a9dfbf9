use std::sync::Arc;

use crate::config::AppConfig;
use crate::listing::collab::{Catalog, ExtensionIcons};
use crate::listing::LinkBuilder;
use crate::metrics::Metrics;

/// The shared application state.
///
/// Everything in here is immutable after startup except the atomic metrics,
/// so handlers never take a lock. Per-listing data (entries, selection,
/// stored tokens) travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Mirror hosts and permalink settings, built once from the configuration.
    pub links: Arc<LinkBuilder>,
    /// Label translations (empty catalog = labels stay as their keys).
    pub translator: Arc<Catalog>,
    pub icons: ExtensionIcons,
    /// The application metrics.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a new `AppState` from a validated configuration.
    ///
    /// Builds the [`LinkBuilder`] from the configured mirrors and loads the
    /// translation catalog if one is configured.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let mut links = LinkBuilder::new(config.mirrors.clone())?;
        if let Some(host) = &config.links.permalink_host {
            links = links.with_permalink_host(host.clone())?;
        }
        if let Some(base) = &config.links.base_url {
            links = links.with_base_url(base.clone());
        }

        let translator = match &config.i18n.catalog {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::default(),
        };

        tracing::info!(
            "Serving listings over {} mirror(s), permalinks on {}",
            links.mirrors().len(),
            links.permalink_host()
        );

        Ok(Self {
            config: Arc::new(config),
            links: Arc::new(links),
            translator: Arc::new(translator),
            icons: ExtensionIcons,
            metrics: Metrics::new(),
        })
    }
}
