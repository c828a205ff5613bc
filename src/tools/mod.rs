pub mod inspect_component;
pub mod list_components;
pub mod search;

pub use inspect_component::*;
pub use list_components::*;
pub use search::*;
