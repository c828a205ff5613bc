//! Component search handler for the documentation search box.

use crate::search::filter_components;
use crate::state::CatalogState;
use crate::types::ComponentDescriptor;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; words are separated by spaces. Empty lists every component.
    pub query: String,
    /// Only return components of this category
    #[serde(default)]
    pub category: Option<String>,
    /// Maximum number of results to return (default from server config)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Run the component filter and format the ranked matches.
pub fn handle_search(state: &CatalogState, request: SearchRequest) -> Result<String, String> {
    let catalog = state.catalog();

    if let Some(category) = &request.category
        && !catalog.has_category(category)
    {
        return Err(format!(
            "Unknown category '{}'. Available categories: {}",
            category,
            catalog.categories().join(", ")
        ));
    }

    let mut results = filter_components(catalog.components(), &request.query);
    if let Some(category) = &request.category {
        results.retain(|c| c.category.eq_ignore_ascii_case(category));
    }

    let total = results.len();
    let limit = request
        .limit
        .unwrap_or_else(|| state.default_limit())
        .max(1);
    results.truncate(limit);

    tracing::debug!(
        "search '{}': {} matches, showing {}",
        request.query,
        total,
        results.len()
    );

    if results.is_empty() {
        return Ok(no_results_message(&request));
    }

    Ok(format_search_results(&results, &request.query, total))
}

fn no_results_message(request: &SearchRequest) -> String {
    let mut msg = match &request.category {
        Some(category) => format!(
            "No components match '{}' in category '{}'.\n\n",
            request.query, category
        ),
        None => format!("No components match '{}'.\n\n", request.query),
    };

    msg.push_str("Search tips:\n");
    msg.push_str("• Try the start of a name, e.g. 'but' for Button\n");
    msg.push_str("• With several words, every word must match a key, title or keyword\n");
    msg.push_str("• Use list_components to browse by category\n");
    msg
}

fn format_search_results(results: &[&ComponentDescriptor], query: &str, total: usize) -> String {
    let mut output = if query.is_empty() {
        format!("All components ({} of {}):\n\n", results.len(), total)
    } else {
        format!(
            "Components matching '{}' ({} of {}):\n\n",
            query,
            results.len(),
            total
        )
    };

    for (idx, component) in results.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} (`{}`) [{}]",
            idx + 1,
            component.title,
            component.key,
            component.category
        );
        if !component.keywords.is_empty() {
            let _ = writeln!(output, "   keywords: {}", component.keywords.join(", "));
        }
    }

    output
}
