use std::cmp::Ordering;

/// A word token. `None` stands for a missing token, e.g. an empty fragment
/// between two separators.
pub type Word = Option<String>;

/// Orders words by length first, then by codepoint. Missing words sort after
/// every present word and are equal to each other.
pub fn compare_words<S: AsRef<str>>(a: &Option<S>, b: &Option<S>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => compare_present(a.as_ref(), b.as_ref()),
    }
}

fn compare_present(a: &str, b: &str) -> Ordering {
    if std::ptr::eq(a, b) {
        return Ordering::Equal;
    }
    // byte order of UTF-8 equals codepoint order
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Borrowing wrapper that gives a word the report order as its `Ord`.
#[derive(Debug, Clone, Copy)]
pub struct WordOrder<'a, S>(pub &'a Option<S>);

impl<'a, S: AsRef<str>> PartialEq for WordOrder<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'a, S: AsRef<str>> Eq for WordOrder<'a, S> {}

impl<'a, S: AsRef<str>> PartialOrd for WordOrder<'a, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, S: AsRef<str>> Ord for WordOrder<'a, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_words(self.0, other.0)
    }
}
