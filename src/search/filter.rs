//! Component filtering for the documentation search box.
//!
//! A query is ranked as a whole first. Queries with two or more distinct words
//! additionally go through a per-word pass where every word has to match some
//! field of a component on its own, so `"dialog modal"` still finds a
//! component titled "Modal Dialog".

use super::ranking::{FieldRule, MatchOptions, Ranking, match_sorter};
use crate::types::{ComponentDescriptor, ComponentField};
use ahash::AHashSet;
use std::ptr;

/// Field rules for ranking the full query string.
///
/// Keyword hits are capped at `Contains` so an alias can never outrank a
/// prefix match on a key or title.
pub fn whole_string_options() -> MatchOptions<ComponentField> {
    MatchOptions::new(vec![
        FieldRule::new(ComponentField::Key).threshold(Ranking::Contains),
        FieldRule::new(ComponentField::Title).threshold(Ranking::Contains),
        FieldRule::new(ComponentField::Keywords)
            .threshold(Ranking::Contains)
            .max_ranking(Ranking::Contains),
    ])
}

/// Stricter rules used for each word of a multi-word query.
pub fn individual_word_options() -> MatchOptions<ComponentField> {
    whole_string_options().with_tiers(Ranking::WordStartsWith, Ranking::CaseSensitiveEqual)
}

/// Split a query on single spaces into distinct, non-empty words.
///
/// Words keep the order they first appear in.
pub fn split_words(search_string: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in search_string.split(' ').filter(|w| !w.is_empty()) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Filter and rank `components` against `search_string`.
///
/// An empty search string returns every component in catalog order. The
/// result never contains the same descriptor twice.
pub fn filter_components<'a>(
    components: &'a [ComponentDescriptor],
    search_string: &str,
) -> Vec<&'a ComponentDescriptor> {
    if search_string.is_empty() {
        return components.iter().collect();
    }

    let all_results = match_sorter(components, search_string, &whole_string_options());

    let words = split_words(search_string);
    if words.len() < 2 {
        return all_results;
    }

    let individual_word_results = filter_by_each_word(components, &words);
    tracing::debug!(
        query = search_string,
        words = words.len(),
        whole = all_results.len(),
        per_word = individual_word_results.len(),
        "filtered components"
    );

    let mut seen = AHashSet::with_capacity(all_results.len() + individual_word_results.len());
    all_results
        .into_iter()
        .chain(individual_word_results)
        .filter(|component| seen.insert(ptr::from_ref(*component)))
        .collect()
}

/// Progressive AND across words: each word narrows the previous survivors.
fn filter_by_each_word<'a>(
    components: &'a [ComponentDescriptor],
    words: &[&str],
) -> Vec<&'a ComponentDescriptor> {
    let Some((first_word, rest_words)) = words.split_first() else {
        return Vec::new();
    };

    let options = individual_word_options();
    let mut survivors = match_sorter(components, first_word, &options);

    for word in rest_words {
        let matched: AHashSet<*const ComponentDescriptor> =
            match_sorter(survivors.iter().copied(), word, &options)
                .into_iter()
                .map(ptr::from_ref)
                .collect();
        survivors.retain(|component| matched.contains(&ptr::from_ref(*component)));
    }

    survivors
}
