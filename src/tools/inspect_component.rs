//! Single-component lookup with "did you mean" suggestions.

use crate::catalog::Catalog;
use crate::state::CatalogState;
use crate::types::ComponentDescriptor;
use rapidfuzz::distance::jaro_winkler;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Suggestions scoring below this are not shown.
const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectComponentRequest {
    /// Component key, e.g. "modal"
    pub key: String,
}

/// A key close to what the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySuggestion<'a> {
    pub component: &'a ComponentDescriptor,
    pub score: f64,
}

pub fn handle_inspect_component(
    state: &CatalogState,
    request: InspectComponentRequest,
) -> Result<String, String> {
    let catalog = state.catalog();

    if let Some(component) = catalog.get(&request.key) {
        return Ok(format_component(component));
    }

    let suggestions = suggest_keys(catalog, &request.key);
    let mut message = format!("Component '{}' not found.", request.key);
    if !suggestions.is_empty() {
        message.push_str(" Did you mean one of these?\n\n");
        for suggestion in &suggestions {
            let _ = writeln!(
                message,
                "• `{}` ({})",
                suggestion.component.key, suggestion.component.title
            );
        }
    }

    Err(message)
}

/// Keys similar to `key`, best first, by Jaro-Winkler similarity on the
/// lowercased key and title.
pub fn suggest_keys<'a>(catalog: &'a Catalog, key: &str) -> Vec<KeySuggestion<'a>> {
    let wanted = key.to_lowercase();

    let mut suggestions: Vec<KeySuggestion<'a>> = catalog
        .components()
        .iter()
        .map(|component| {
            let by_key = jaro_winkler::similarity(wanted.chars(), component.key.to_lowercase().chars());
            let by_title =
                jaro_winkler::similarity(wanted.chars(), component.title.to_lowercase().chars());
            KeySuggestion {
                component,
                score: by_key.max(by_title),
            }
        })
        .filter(|s| s.score >= SUGGESTION_THRESHOLD)
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn format_component(component: &ComponentDescriptor) -> String {
    let mut output = format!("{}\n\n", component.title);
    let _ = writeln!(output, "key:      {}", component.key);
    let _ = writeln!(output, "category: {}", component.category);
    if component.keywords.is_empty() {
        output.push_str("keywords: (none)\n");
    } else {
        let _ = writeln!(output, "keywords: {}", component.keywords.join(", "));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    fn state() -> CatalogState {
        Catalog::builtin().unwrap().into()
    }

    #[test]
    fn test_inspect_known_key() {
        let request = InspectComponentRequest {
            key: "modal".to_string(),
        };
        let_assert!(Ok(output) = handle_inspect_component(&state(), request));
        check!(output.starts_with("Modal Dialog\n\n"));
        check!(output.contains("category: overlays"));
        check!(output.contains("keywords: popup, danger, warning, success, info"));
    }

    #[test]
    fn test_inspect_typo_suggests() {
        let request = InspectComponentRequest {
            key: "buton".to_string(),
        };
        let_assert!(Err(message) = handle_inspect_component(&state(), request));
        check!(message.starts_with("Component 'buton' not found. Did you mean"));
        check!(message.contains("`button`"));
    }

    #[test]
    fn test_suggestions_sorted_best_first() {
        let catalog = Catalog::builtin().unwrap();
        let suggestions = suggest_keys(&catalog, "textarae");
        let_assert!(Some(first) = suggestions.first());
        check!(first.component.key == "textarea");
        check!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_no_close_keys() {
        let request = InspectComponentRequest {
            key: "zzzzzzzz".to_string(),
        };
        let_assert!(Err(message) = handle_inspect_component(&state(), request));
        check!(message == "Component 'zzzzzzzz' not found.");
    }
}
