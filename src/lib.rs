//! # rust-ccg-catalog
//!
//! Card catalog loading and the debug screen core of a card game client.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The host toolkit owns rendering, input and screen
//!    switching. This crate only sees collaborator traits, so everything
//!    here runs in plain unit tests.
//!
//! 2. **All-or-Nothing Loads**: A catalog either loads completely or not at
//!    all. Failures become a single human-readable list entry.
//!
//! 3. **Explicit Ownership**: Catalog and selection are fields of one
//!    `DebugScreen`, created on screen enter and consumed on dispose.
//!
//! ## Modules
//!
//! - `cards`: Card record and card types
//! - `catalog`: Resource lookup, loading, selection
//! - `screen`: Debug screen state, command table, FPS counter
//! - `config`: Catalog and screen configuration
//!
//! ## Logging
//!
//! Log records go through `cli-log`. The host decides whether and where
//! they are written (`cli_log::init_cli_log!()`).

pub mod cards;
pub mod catalog;
pub mod config;
pub mod screen;

// Re-export commonly used types
pub use crate::cards::{Card, CardType};

pub use crate::catalog::{
    resolve, parse_catalog,
    AssetSource, DirAssets, MemoryAssets,
    Catalog, CatalogListing, CatalogLoadError, CatalogLoader,
};

pub use crate::config::{CatalogConfig, ScreenConfig, DEFAULT_CATALOG_RESOURCE};

pub use crate::screen::{
    DebugScreen, CatalogState,
    Command, CommandTable, UiElement,
    CardListView, ScreenRouter, SelectionList, PendingTransition,
    FpsCounter,
};
