use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for list_components tool
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListComponentsRequest {
    /// Only list this category
    #[serde(default)]
    pub category: Option<String>,
}

/// List catalog components grouped by category, in catalog order.
pub fn handle_list_components(
    state: &CatalogState,
    request: ListComponentsRequest,
) -> Result<String, String> {
    let catalog = state.catalog();

    if catalog.is_empty() {
        return Ok("The component catalog is empty.\n".to_string());
    }

    let categories: Vec<&str> = match &request.category {
        Some(wanted) => catalog
            .categories()
            .into_iter()
            .filter(|c| c.eq_ignore_ascii_case(wanted))
            .collect(),
        None => catalog.categories(),
    };

    if categories.is_empty() {
        return Err(format!(
            "Unknown category '{}'. Available categories: {}",
            request.category.as_deref().unwrap_or_default(),
            catalog.categories().join(", ")
        ));
    }

    let mut output = String::new();
    for category in categories {
        let members = catalog.in_category(category);
        let _ = writeln!(output, "{} ({}):", category, members.len());
        for component in members {
            let _ = writeln!(output, "  • {} (`{}`)", component.title, component.key);
        }
        output.push('\n');
    }

    Ok(output)
}
