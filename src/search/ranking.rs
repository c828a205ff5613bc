//! Tiered string ranking and the multi-field `match_sorter` primitive.
//!
//! A candidate string is ranked against a query into one of a fixed set of
//! [`Ranking`] tiers. Items are ranked field by field using [`FieldRule`]s,
//! which set the minimum tier an item needs to be kept and an optional cap on
//! what a field may contribute.

use std::borrow::Cow;
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Relevance tier of a (candidate, query) pair, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Ranking {
    /// Query does not match at all
    #[default]
    NoMatch,
    /// Query characters appear in order, possibly spread out
    Matches,
    /// Query is contained in the candidate's acronym
    Acronym,
    /// Query appears anywhere in the candidate
    Contains,
    /// A word of the candidate starts with the query
    WordStartsWith,
    /// Candidate starts with the query
    StartsWith,
    /// Case-insensitive equality
    Equal,
    /// Character-for-character equality
    CaseSensitiveEqual,
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoMatch => "no-match",
            Self::Matches => "matches",
            Self::Acronym => "acronym",
            Self::Contains => "contains",
            Self::WordStartsWith => "word-starts-with",
            Self::StartsWith => "starts-with",
            Self::Equal => "equal",
            Self::CaseSensitiveEqual => "case-sensitive-equal",
        };
        f.write_str(name)
    }
}

/// Types whose fields can be ranked against a query.
pub trait Searchable {
    /// Field selector, usually a small `Copy` enum.
    type Field: Copy + fmt::Debug;

    /// All values of `field`. Multi-valued fields return one entry per value.
    fn field_values(&self, field: Self::Field) -> Vec<&str>;
}

/// How one field participates in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule<F> {
    pub field: F,
    /// Minimum tier required to keep an item when this field ranks highest
    pub threshold: Ranking,
    /// Tiers above this are clamped down to it
    pub max_ranking: Option<Ranking>,
}

impl<F> FieldRule<F> {
    /// A rule with the loosest threshold (`Matches`) and no cap.
    pub const fn new(field: F) -> Self {
        Self {
            field,
            threshold: Ranking::Matches,
            max_ranking: None,
        }
    }

    pub const fn threshold(mut self, threshold: Ranking) -> Self {
        self.threshold = threshold;
        self
    }

    pub const fn max_ranking(mut self, max_ranking: Ranking) -> Self {
        self.max_ranking = Some(max_ranking);
        self
    }

    fn clamp(&self, ranking: Ranking) -> Ranking {
        match self.max_ranking {
            Some(max) if ranking > max => max,
            _ => ranking,
        }
    }
}

/// Ordered field rules. Earlier rules win ties between equal tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions<F> {
    pub rules: Vec<FieldRule<F>>,
}

impl<F: Copy> MatchOptions<F> {
    pub const fn new(rules: Vec<FieldRule<F>>) -> Self {
        Self { rules }
    }

    /// Same fields, every rule given the same threshold and cap.
    pub fn with_tiers(&self, threshold: Ranking, max_ranking: Ranking) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .map(|rule| FieldRule::new(rule.field).threshold(threshold).max_ranking(max_ranking))
                .collect(),
        }
    }
}

/// Best tier an item reached and the threshold of the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRanking {
    pub ranking: Ranking,
    pub threshold: Ranking,
}

impl ItemRanking {
    pub fn passes(&self) -> bool {
        self.ranking >= self.threshold
    }
}

/// Rank `candidate` against `query`.
///
/// Diacritics are ignored on both sides and every tier except
/// [`Ranking::CaseSensitiveEqual`] compares case-insensitively. A query longer
/// than the candidate never matches.
pub fn rank_string(candidate: &str, query: &str) -> Ranking {
    let candidate = strip_diacritics(candidate);
    let query = strip_diacritics(query);

    if query.chars().count() > candidate.chars().count() {
        return Ranking::NoMatch;
    }
    if candidate == query {
        return Ranking::CaseSensitiveEqual;
    }

    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate == query {
        Ranking::Equal
    } else if candidate.starts_with(&query) {
        Ranking::StartsWith
    } else if candidate.contains(&format!(" {query}")) {
        Ranking::WordStartsWith
    } else if candidate.contains(&query) {
        Ranking::Contains
    } else if query.chars().count() == 1 {
        Ranking::NoMatch
    } else if acronym(&candidate).contains(&query) {
        Ranking::Acronym
    } else if is_subsequence(&candidate, &query) {
        Ranking::Matches
    } else {
        Ranking::NoMatch
    }
}

/// Highest clamped tier across all rules, or `None` when nothing matched.
pub fn rank_item<T: Searchable>(
    item: &T,
    query: &str,
    rules: &[FieldRule<T::Field>],
) -> Option<ItemRanking> {
    let mut best: Option<ItemRanking> = None;

    for rule in rules {
        for value in item.field_values(rule.field) {
            let ranking = rule.clamp(rank_string(value, query));
            let better = match best {
                Some(current) => ranking > current.ranking,
                None => ranking > Ranking::NoMatch,
            };
            if better {
                best = Some(ItemRanking {
                    ranking,
                    threshold: rule.threshold,
                });
            }
        }
    }

    best
}

/// Keep the items that reach their threshold, sorted by descending tier.
///
/// The sort is stable: items of equal tier keep their input order.
pub fn match_sorter<'a, T, I>(items: I, query: &str, options: &MatchOptions<T::Field>) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<(Ranking, &'a T)> = items
        .into_iter()
        .filter_map(|item| {
            let ranking = rank_item(item, query, &options.rules)?;
            ranking.passes().then_some((ranking.ranking, item))
        })
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.into_iter().map(|(_, item)| item).collect()
}

fn strip_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.nfd().filter(|c| !is_combining_mark(*c)).collect())
    }
}

/// First letter of every space- or hyphen-separated word.
fn acronym(s: &str) -> String {
    s.split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

fn is_subsequence(haystack: &str, needle: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|n| haystack.any(|h| h == n))
}
