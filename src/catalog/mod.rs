//! Card catalog: loading, lookup and selection.
//!
//! ## Key Types
//!
//! - `AssetSource`: Resolves a bundled resource name to its text
//! - `CatalogLoader`: Reads and parses the catalog resource
//! - `Catalog`: Cards of one load plus their display strings, in order
//! - `CatalogListing`: What the card list shows for a load result
//! - `CatalogLoadError`: Why a load failed
//! - `resolve`: Display string back to card
//!
//! ## Failure Policy
//!
//! Loads are all-or-nothing. A failed load never yields a partial catalog;
//! the screen shows the error text as the only list entry instead.

pub mod assets;
pub mod entries;
pub mod error;
pub mod loader;
pub mod selector;

pub use assets::{AssetSource, DirAssets, MemoryAssets};
pub use entries::Catalog;
pub use error::CatalogLoadError;
pub use loader::{parse_catalog, CatalogListing, CatalogLoader};
pub use selector::resolve;
