use crate::search::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One documented component of the design system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique short identifier, e.g. `clipboard-copy-button`
    pub key: String,
    /// Display name shown in the docs navigation
    pub title: String,
    /// Grouping label (`inputs`, `overlays`, ...)
    pub category: String,
    /// Extra search aliases, each matched on its own
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ComponentDescriptor {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            category: category.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Searchable fields of a [`ComponentDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentField {
    Key,
    Title,
    Keywords,
}

impl fmt::Display for ComponentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Title => write!(f, "title"),
            Self::Keywords => write!(f, "keywords"),
        }
    }
}

impl Searchable for ComponentDescriptor {
    type Field = ComponentField;

    fn field_values(&self, field: ComponentField) -> Vec<&str> {
        match field {
            ComponentField::Key => vec![self.key.as_str()],
            ComponentField::Title => vec![self.title.as_str()],
            ComponentField::Keywords => self.keywords.iter().map(String::as_str).collect(),
        }
    }
}
