//! Component catalogs: loading, validation and lookup.
//!
//! A catalog file is a TOML (or JSON) document with a `components` array:
//!
//! ```toml
//! [[components]]
//! key = "button"
//! title = "Button"
//! category = "inputs"
//! keywords = ["cta"]
//! ```

use crate::error::CatalogError;
use crate::types::ComponentDescriptor;
use ahash::AHashSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../assets/components.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: Vec<ComponentDescriptor>,
}

/// An ordered, validated set of component descriptors.
///
/// Keys are unique and non-empty. Order is the order of the source file and is
/// the order an empty search returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    components: Vec<ComponentDescriptor>,
}

impl Catalog {
    /// Build a catalog from descriptors, rejecting empty or duplicate keys.
    pub fn new(components: Vec<ComponentDescriptor>) -> Result<Self, CatalogError> {
        let mut keys = AHashSet::with_capacity(components.len());
        for (index, component) in components.iter().enumerate() {
            if component.key.is_empty() {
                return Err(CatalogError::EmptyKey { index });
            }
            if !keys.insert(component.key.as_str()) {
                return Err(CatalogError::DuplicateKey(component.key.clone()));
            }
        }
        Ok(Self { components })
    }

    /// The design system's own components.
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_toml(BUILTIN_CATALOG, Path::new("<builtin>"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        parse_toml(content, Path::new("<inline>"))
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        parse_json(content, Path::new("<inline>"))
    }

    /// Load a catalog file. `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            parse_json(&content, path)?
        } else {
            parse_toml(&content, path)?
        };

        tracing::info!(
            "Loaded {} components from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a component by exact key.
    pub fn get(&self, key: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.key == key)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for component in &self.components {
            if !categories.contains(&component.category.as_str()) {
                categories.push(&component.category);
            }
        }
        categories
    }

    /// Whether any component belongs to `category` (case-insensitive).
    pub fn has_category(&self, category: &str) -> bool {
        self.components
            .iter()
            .any(|c| c.category.eq_ignore_ascii_case(category))
    }

    /// Components of one category (case-insensitive), in catalog order.
    pub fn in_category(&self, category: &str) -> Vec<&ComponentDescriptor> {
        self.components
            .iter()
            .filter(|c| c.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

fn parse_toml(content: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Toml {
        path: PathBuf::from(path),
        source,
    })?;
    Catalog::new(file.components)
}

fn parse_json(content: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile =
        serde_json::from_str(content).map_err(|source| CatalogError::Json {
            path: PathBuf::from(path),
            source,
        })?;
    Catalog::new(file.components)
}
