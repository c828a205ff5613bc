//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_catalog`: the two-component catalog used by the search scenarios
//! - `design_system`: the built-in catalog shipped with the binary
//! - `design_system_state`: `CatalogState` over the built-in catalog
//!
//! [`TempWorkspace`] provides a temp directory for tests that read catalog and
//! config files from disk.

#![allow(dead_code)] // Not every integration test crate uses every helper

use componentdoc_mcp::{Catalog, CatalogState, ComponentDescriptor};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// # Example
///
/// ```ignore
/// let workspace = TempWorkspace::new();
/// let path = workspace.create_file("catalog.toml", "[[components]]\n...");
/// assert!(path.exists());
/// ```
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content and returns its full path.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys of a result list, in order.
pub fn keys(results: &[&ComponentDescriptor]) -> Vec<String> {
    results.iter().map(|c| c.key.clone()).collect()
}

/// The Button / Modal Dialog catalog from the search scenarios.
#[fixture]
pub fn sample_catalog() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor::new("button", "Button", "inputs", &["cta"]),
        ComponentDescriptor::new("modal", "Modal Dialog", "overlays", &["popup"]),
    ]
}

/// The catalog embedded in the binary.
#[fixture]
pub fn design_system() -> Catalog {
    Catalog::builtin().expect("built-in catalog must parse")
}

#[fixture]
pub fn design_system_state(design_system: Catalog) -> CatalogState {
    CatalogState::new(design_system, 10)
}
