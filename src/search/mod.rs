//! Component search: tiered ranking and the multi-word catalog filter.

pub(crate) mod filter;
pub(crate) mod ranking;

pub use filter::{filter_components, individual_word_options, split_words, whole_string_options};
pub use ranking::{
    FieldRule, ItemRanking, MatchOptions, Ranking, Searchable, match_sorter, rank_item,
    rank_string,
};
