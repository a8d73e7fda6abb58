use std::cmp::{self, Ordering};
use std::mem;
use std::str::FromStr;

use crate::compare::{compare_words, Word};
use crate::error::{AnalyzerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Recursive halving, depth O(log n).
    TopDown,
    /// Iterative merging of runs of width 1, 2, 4, ...
    BottomUp,
}

impl Default for SortStrategy {
    fn default() -> Self {
        SortStrategy::TopDown
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "top-down" => Ok(SortStrategy::TopDown),
            "bottom-up" => Ok(SortStrategy::BottomUp),
            other => Err(format!("unknown sorter \"{}\"", other)),
        }
    }
}

impl SortStrategy {
    /// Sorts `data[first..first + len]` with this strategy.
    pub fn sort_by<T, F>(self, data: &mut [T], first: usize, len: usize, compare: F) -> Result<()>
    where
        T: Default,
        F: FnMut(&T, &T) -> Ordering,
    {
        let range = sub_range(data, first, len)?;
        self.sort_slice_by(range, compare);
        Ok(())
    }

    pub fn sort_slice_by<T, F>(self, data: &mut [T], mut compare: F)
    where
        T: Default,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut scratch = Vec::with_capacity(data.len() / 2);
        match self {
            SortStrategy::TopDown => sort_recursive(data, &mut scratch, &mut compare),
            SortStrategy::BottomUp => sort_iterative(data, &mut scratch, &mut compare),
        }
    }
}

/// Stable top-down merge sort of `data[first..first + len]` in place.
///
/// Positions outside the range are left untouched. A range reaching past the
/// end of `data` is rejected with `AnalyzerError::InvalidRange`.
pub fn merge_sort_by<T, F>(data: &mut [T], first: usize, len: usize, compare: F) -> Result<()>
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    SortStrategy::TopDown.sort_by(data, first, len, compare)
}

/// Same contract as `merge_sort_by`, without recursion.
pub fn bottom_up_merge_sort_by<T, F>(data: &mut [T], first: usize, len: usize, compare: F) -> Result<()>
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    SortStrategy::BottomUp.sort_by(data, first, len, compare)
}

/// Puts a whole word sequence into report order.
pub fn sort_words(words: &mut [Word], strategy: SortStrategy) {
    strategy.sort_slice_by(words, compare_words::<String>);
}

fn sub_range<T>(data: &mut [T], first: usize, len: usize) -> Result<&mut [T]> {
    let size = data.len();
    match first.checked_add(len) {
        Some(end) if end <= size => Ok(&mut data[first..end]),
        _ => Err(AnalyzerError::InvalidRange { first, len, size }),
    }
}

fn sort_recursive<T, F>(data: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    if n <= 1 {
        return;
    }
    let n1 = n / 2;
    sort_recursive(&mut data[..n1], scratch, compare);
    sort_recursive(&mut data[n1..], scratch, compare);
    merge(data, n1, scratch, compare);
}

fn sort_iterative<T, F>(data: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start + width < n {
            let end = cmp::min(start + 2 * width, n);
            merge(&mut data[start..end], width, scratch, compare);
            start = end;
        }
        width *= 2;
    }
}

/// Merges the ordered runs `data[..n1]` and `data[n1..]`.
///
/// The first run is moved into `scratch` and merged back from the front. The
/// write cursor never overtakes the read cursor of the second run, so the
/// second run can be merged without copying it out. Ties take the element of
/// the first run.
fn merge<T, F>(data: &mut [T], n1: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    if n1 == 0 || n1 == data.len() || compare(&data[n1 - 1], &data[n1]) != Ordering::Greater {
        return;
    }

    scratch.clear();
    scratch.extend(data[..n1].iter_mut().map(mem::take));

    let mut left = 0;
    let mut right = n1;
    let mut out = 0;
    while left < scratch.len() && right < data.len() {
        if compare(&scratch[left], &data[right]) != Ordering::Greater {
            data[out] = mem::take(&mut scratch[left]);
            left += 1;
        } else {
            data[out] = mem::take(&mut data[right]);
            right += 1;
        }
        out += 1;
    }

    // leftovers of the second run are already in place
    for item in scratch.drain(left..) {
        data[out] = item;
        out += 1;
    }
}
