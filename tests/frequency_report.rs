use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Cursor;

use text_analyzer::util::write_report;
use text_analyzer::*;

const COUNTING: [CountStrategy; 2] = [CountStrategy::SortThenScan, CountStrategy::TallyThenSort];
const SORTERS: [SortStrategy; 2] = [SortStrategy::TopDown, SortStrategy::BottomUp];

fn words(raw: &[&str]) -> Vec<Word> {
    raw.iter().map(|w| Some(w.to_string())).collect()
}

fn pairs(report: &[WordFrequency]) -> Vec<(u64, &str)> {
    report
        .iter()
        .map(|e| (e.count, e.word.as_deref().unwrap_or("<missing>")))
        .collect()
}

fn all_reports(input: &[Word]) -> Vec<Vec<WordFrequency>> {
    let mut reports = Vec::new();
    for &counting in COUNTING.iter() {
        for &sorter in SORTERS.iter() {
            reports.push(frequency_report(input.to_vec(), counting, sorter));
        }
    }
    reports
}

fn document() -> Vec<Word> {
    let text = "the quick brown fox jumps over the lazy dog \
                and the dog sleeps while a fox and a cat watch the dog";
    let mut tokens: Vec<Word> = text.split(' ').map(|w| Some(w.to_string())).collect();
    tokens.insert(4, None);
    tokens.push(None);
    tokens
}

#[test]
fn mixed_lengths_scenario() {
    let input = words(&["cat", "dog", "a", "bat", "cat"]);

    let mut sorted = input.clone();
    sort_words(&mut sorted, SortStrategy::TopDown);
    assert_eq!(sorted, words(&["a", "bat", "cat", "cat", "dog"]));

    for report in all_reports(&input) {
        assert_eq!(pairs(&report), vec![(1, "a"), (1, "bat"), (2, "cat"), (1, "dog")]);
    }
}

#[test]
fn empty_scenario() {
    for report in all_reports(&[]) {
        assert!(report.is_empty());
    }
}

#[test]
fn repeated_word_scenario() {
    for report in all_reports(&words(&["aa", "aa", "aa"])) {
        assert_eq!(pairs(&report), vec![(3, "aa")]);
    }
}

#[test]
fn two_letters_scenario() {
    let mut sorted = words(&["b", "a"]);
    sort_words(&mut sorted, SortStrategy::BottomUp);
    assert_eq!(sorted, words(&["a", "b"]));
    for report in all_reports(&words(&["b", "a"])) {
        assert_eq!(pairs(&report), vec![(1, "a"), (1, "b")]);
    }
}

#[test]
fn sorting_orders_and_permutes() {
    let input = document();
    for &sorter in SORTERS.iter() {
        let mut sorted = input.clone();
        sort_words(&mut sorted, sorter);

        for pair in sorted.windows(2) {
            assert_ne!(compare_words(&pair[0], &pair[1]), Ordering::Greater);
        }

        let mut before: HashMap<&Word, usize> = HashMap::new();
        for word in &input {
            *before.entry(word).or_insert(0) += 1;
        }
        let mut after: HashMap<&Word, usize> = HashMap::new();
        for word in &sorted {
            *after.entry(word).or_insert(0) += 1;
        }
        assert_eq!(before, after);

        let again = {
            let mut again = sorted.clone();
            sort_words(&mut again, sorter);
            again
        };
        assert_eq!(again, sorted);
    }
}

#[test]
fn report_counts_cover_the_document() {
    let input = document();
    let reports = all_reports(&input);
    for report in &reports {
        let total: u64 = report.iter().map(|e| e.count).sum();
        assert_eq!(total, input.len() as u64);

        for pair in report.windows(2) {
            assert_ne!(pair[0].word, pair[1].word);
            assert_eq!(compare_words(&pair[0].word, &pair[1].word), Ordering::Less);
        }
        assert_eq!(report, &reports[0]);
    }

    let the = reports[0]
        .iter()
        .find(|e| e.word.as_deref() == Some("the"))
        .unwrap();
    assert_eq!(the.count, 4);
    let last = reports[0].last().unwrap();
    assert_eq!((last.count, last.word.clone()), (2, None));
}

#[test]
fn sub_range_sort_with_word_order() {
    let mut data = words(&["zz", "ccc", "b", "aa", "d"]);
    merge_sort_by(&mut data, 1, 3, |a, b| compare_words(a, b)).unwrap();
    assert_eq!(data, words(&["zz", "b", "aa", "ccc", "d"]));

    match bottom_up_merge_sort_by(&mut data, 5, 1, |a, b| WordOrder(a).cmp(&WordOrder(b))) {
        Err(AnalyzerError::InvalidRange { first: 5, len: 1, size: 5 }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

fn render(text: &str, empty: EmptyTokens, counting: CountStrategy) -> String {
    let tokens = read_words(Cursor::new(text), empty).unwrap();
    let report = frequency_report(tokens, counting, SortStrategy::TopDown);
    let mut out = Vec::new();
    write_report(&mut out, &report, false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn text_to_rendered_report() {
    let text = "cat dog\r\na bat\ncat\n";
    for &counting in COUNTING.iter() {
        assert_eq!(render(text, EmptyTokens::Skip, counting), "1 a\n1 bat\n2 cat\n1 dog\n");
        assert_eq!(render(text, EmptyTokens::Keep, counting), "1 \n1 a\n1 bat\n2 cat\n1 dog\n");
    }
}

#[test]
fn kept_empty_fragment_is_a_zero_length_word() {
    for &counting in COUNTING.iter() {
        assert_eq!(render("a\r\nb", EmptyTokens::Keep, counting), "1 \n1 a\n1 b\n");
        assert_eq!(render("a\r\nb", EmptyTokens::Skip, counting), "1 a\n1 b\n");
        assert_eq!(render("x  y  x", EmptyTokens::Keep, counting), "2 \n2 x\n1 y\n");
    }
}

#[test]
fn empty_document_with_kept_fragments() {
    for &counting in COUNTING.iter() {
        assert_eq!(render("", EmptyTokens::Keep, counting), "1 \n");
        assert_eq!(render("", EmptyTokens::Skip, counting), "");
        assert_eq!(render("\r\n", EmptyTokens::Keep, counting), "");
    }
}
