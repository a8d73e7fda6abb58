use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::compare::{compare_words, Word};
use crate::merge_sort::{sort_words, SortStrategy};

/// One line of the report: how often `word` occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequency<T> {
    pub count: u64,
    pub word: T,
}

impl<T> Frequency<T> {
    pub fn new(count: u64, word: T) -> Self {
        Frequency { count, word }
    }
}

pub type WordFrequency = Frequency<Word>;

/// Collapses runs of equal neighbours into counted entries.
///
/// Entries come out in input order, so a sorted input gives a sorted report.
pub fn count_runs<T: PartialEq + Clone>(sorted: &[T]) -> Vec<Frequency<T>> {
    let mut entries = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut run = 1;
        while i + run < sorted.len() && sorted[i + run] == sorted[i] {
            run += 1;
        }
        entries.push(Frequency::new(run as u64, sorted[i].clone()));
        i += run;
    }
    entries
}

/// Counts occurrences without ordering them.
pub fn tally<T: Hash + Eq>(words: Vec<T>) -> HashMap<T, u64> {
    let mut frequency: HashMap<T, u64> = HashMap::new();
    for word in words {
        *frequency.entry(word).or_insert(0) += 1;
    }
    frequency
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStrategy {
    /// Sort the whole document, then count runs.
    SortThenScan,
    /// Count through a hash map, then sort the distinct words only.
    TallyThenSort,
}

/// Builds the frequency report for a tokenized document.
pub fn frequency_report(
    mut words: Vec<Word>,
    counting: CountStrategy,
    sorter: SortStrategy,
) -> Vec<WordFrequency> {
    let total = words.len();
    let report = match counting {
        CountStrategy::SortThenScan => {
            sort_words(&mut words, sorter);
            count_runs(&words)
        }
        CountStrategy::TallyThenSort => {
            let mut entries: Vec<WordFrequency> = tally(words)
                .into_iter()
                .map(|(word, count)| Frequency::new(count, word))
                .collect();
            sorter.sort_slice_by(&mut entries, |a, b| compare_words(&a.word, &b.word));
            entries
        }
    };
    debug!("{} words, {} distinct ({:?})", total, report.len(), counting);
    report
}
