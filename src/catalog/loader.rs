//! Card catalog loader.
//!
//! Reads the bundled catalog resource, deserializes it and builds a
//! `Catalog`. Loading is all-or-nothing: any failure yields an error and no
//! cards at all.
//!
//! ## Resource format
//!
//! ```json
//! {
//!   "cards": [
//!     {"id": "c1", "name": "Slash", "type": "ATTACK_CLOSE", "cost": 1,
//!      "description": "...", "tags": ["blade"], "effectCode": "...",
//!      "suggestion": "..."}
//!   ]
//! }
//! ```

use serde::Deserialize;

use super::assets::{AssetSource, DirAssets};
use super::entries::Catalog;
use super::error::CatalogLoadError;
use crate::cards::Card;
use crate::config::CatalogConfig;

#[derive(Deserialize)]
struct CatalogDocument {
    cards: Vec<Card>,
}

/// Parse a catalog document.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogLoadError> {
    let document: CatalogDocument = serde_json::from_str(text)?;
    Catalog::from_cards(document.cards)
}

/// What the card list shows for a load result.
///
/// Success gives the display strings and cards. Failure gives a single
/// entry holding the error text and no cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogListing {
    pub display: Vec<String>,
    pub cards: Vec<Card>,
}

impl CatalogListing {
    #[must_use]
    pub fn from_result(result: &Result<Catalog, CatalogLoadError>) -> Self {
        match result {
            Ok(catalog) => Self {
                display: catalog.display_strings(),
                cards: catalog.cards(),
            },
            Err(err) => Self {
                display: vec![err.to_string()],
                cards: Vec::new(),
            },
        }
    }
}

/// Loads the catalog named in a `CatalogConfig` from an `AssetSource`.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::catalog::{CatalogLoader, MemoryAssets};
/// use rust_ccg_catalog::config::CatalogConfig;
///
/// let assets = MemoryAssets::new().with(
///     "cards.json",
///     r#"{"cards": [{"id": "c1", "name": "Slash", "type": "ATTACK_CLOSE", "cost": 1}]}"#,
/// );
/// let loader = CatalogLoader::new(CatalogConfig::default(), assets);
///
/// let catalog = loader.load().unwrap();
/// assert_eq!(catalog.display_strings(), ["Slash(c1, ATTACK_CLOSE, cost 1)"]);
/// ```
#[derive(Clone, Debug)]
pub struct CatalogLoader<A> {
    config: CatalogConfig,
    assets: A,
}

impl CatalogLoader<DirAssets> {
    /// Loader reading from `config.assets_dir` on disk.
    #[must_use]
    pub fn from_dir(config: CatalogConfig) -> Self {
        let assets = DirAssets::from_config(&config);
        Self::new(config, assets)
    }
}

impl<A: AssetSource> CatalogLoader<A> {
    pub fn new(config: CatalogConfig, assets: A) -> Self {
        Self { config, assets }
    }

    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    #[must_use]
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Swap or edit resources between loads.
    pub fn assets_mut(&mut self) -> &mut A {
        &mut self.assets
    }

    /// Read and parse the configured resource.
    pub fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let name = &self.config.resource;
        cli_log::debug!("loading card catalog from '{}'", name);

        let result = self
            .assets
            .read(name)
            .map_err(|source| CatalogLoadError::MissingResource {
                name: name.clone(),
                source,
            })
            .and_then(|text| parse_catalog(&text));

        match &result {
            Ok(catalog) => cli_log::info!("loaded {} cards from '{}'", catalog.len(), name),
            Err(err) => cli_log::warn!("{}", err),
        }
        result
    }

    /// Load and convert to what the card list should show.
    #[must_use]
    pub fn load_listing(&self) -> CatalogListing {
        CatalogListing::from_result(&self.load())
    }
}
