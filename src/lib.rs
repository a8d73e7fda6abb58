//! Word frequency reports ordered by word length, then codepoint.
//!
//! Tokens are put into report order by a merge sort driven by
//! [`compare_words`](compare::compare_words) and then collapsed into counted
//! runs by [`count_runs`](report::count_runs).

pub mod compare;
pub mod error;
pub mod logging;
pub mod merge_sort;
pub mod report;
pub mod tokenize;
pub mod util;

pub use crate::compare::{compare_words, Word, WordOrder};
pub use crate::error::AnalyzerError;
pub use crate::merge_sort::{bottom_up_merge_sort_by, merge_sort_by, sort_words, SortStrategy};
pub use crate::report::{count_runs, frequency_report, CountStrategy, Frequency, WordFrequency};
pub use crate::tokenize::{read_words, EmptyTokens, WordCodec};
