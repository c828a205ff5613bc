pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;
pub mod types;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, ConfigError};
pub use search::filter_components;
pub use server::ComponentServer;
pub use state::CatalogState;
pub use types::{ComponentDescriptor, ComponentField};
