//! Bundled resource lookup.
//!
//! The loader never touches the filesystem directly; it asks an
//! `AssetSource` for the text of a named resource. `DirAssets` reads from
//! an assets directory, `MemoryAssets` serves text held in memory (tests,
//! resources embedded with `include_str!`).

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::config::CatalogConfig;

/// Resolves a resource name to its text.
pub trait AssetSource {
    /// Read the whole resource as UTF-8 text.
    fn read(&self, name: &str) -> io::Result<String>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn read(&self, name: &str) -> io::Result<String> {
        (**self).read(name)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn read(&self, name: &str) -> io::Result<String> {
        (**self).read(name)
    }
}

/// Resources stored as files under a root directory.
#[derive(Clone, Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root at `config.assets_dir`.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.assets_dir.clone())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirAssets {
    fn read(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(name))
    }
}

/// Resources held in memory.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::catalog::{AssetSource, MemoryAssets};
///
/// let assets = MemoryAssets::new().with("cards.json", r#"{"cards": []}"#);
/// assert_eq!(assets.read("cards.json").unwrap(), r#"{"cards": []}"#);
/// assert!(assets.read("missing.json").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryAssets {
    files: FxHashMap<String, String>,
}

impl MemoryAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }

    /// Remove a resource, returning its text.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.files.remove(name)
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, name: &str) -> io::Result<String> {
        self.files.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no resource named '{name}'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_assets_insert_and_remove() {
        let mut assets = MemoryAssets::new();
        assets.insert("a.json", "1");
        assets.insert("a.json", "2");

        assert_eq!(assets.read("a.json").unwrap(), "2");
        assert_eq!(assets.remove("a.json"), Some("2".to_string()));
        assert_eq!(assets.read("a.json").unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dir_assets_reads_from_root() {
        let root = std::env::temp_dir().join(format!("ccg-assets-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("cards.json"), r#"{"cards": []}"#).unwrap();

        let assets = DirAssets::new(&root);
        assert_eq!(assets.root(), root.as_path());
        assert_eq!(assets.read("cards.json").unwrap(), r#"{"cards": []}"#);
        assert!(assets.read("other.json").is_err());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_dir_assets_from_config() {
        let config = CatalogConfig::default().with_assets_dir(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets"
        ));
        let assets = DirAssets::from_config(&config);

        assert_eq!(assets.root(), config.assets_dir.as_path());
        assert!(assets.read(&config.resource).unwrap().contains("\"cards\""));

        let elsewhere = DirAssets::from_config(&config.with_assets_dir("/nonexistent"));
        assert!(elsewhere.read("cards.json").is_err());
    }

    #[test]
    fn test_borrowed_source() {
        let assets = MemoryAssets::new().with("x", "y");
        fn read_x<S: AssetSource>(source: S) -> String {
            source.read("x").unwrap()
        }

        assert_eq!(read_x(&assets), "y");
        assert_eq!(read_x(Box::new(assets.clone()) as Box<dyn AssetSource>), "y");
    }
}
