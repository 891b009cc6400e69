mod common;

use common::lex;
use std::ops::Range;
use tokpred::{
    MatchOptions, Matcher, Predicate, any, find_all, keyword, kind, not, optional, repeat,
    sequence, token,
    token::category::{DELIMITER, IDENTIFIER, KEYWORD},
};

fn collect_ranges(predicate: &Predicate, source: &str) -> Vec<Range<usize>> {
    let tokens = lex(source);
    find_all(predicate, &tokens).map(|m| m.range()).collect()
}

fn block() -> Predicate {
    sequence([
        token(KEYWORD, "BEGIN"),
        repeat(not(token(KEYWORD, "END")).unwrap(), 0, None).unwrap(),
        token(KEYWORD, "END"),
    ])
    .unwrap()
}

#[test]
fn test_single_match() {
    assert_eq!(collect_ranges(&block(), "BEGIN x = 1 ; END"), vec![0..6]);
}

#[test]
fn test_repeated_match() {
    assert_eq!(
        collect_ranges(&block(), "x ; BEGIN a END ; BEGIN END y"),
        vec![2..5, 6..8]
    );
}

#[test]
fn test_no_match() {
    assert_eq!(collect_ranges(&block(), "x ; y"), vec![]);
    assert_eq!(collect_ranges(&block(), ""), vec![]);
    assert_eq!(collect_ranges(&block(), "BEGIN x"), vec![]);
}

#[test]
fn test_overlapping_candidates() {
    // could match at 0 (a b) and at 1 (b c); only the first is reported and
    // scanning resumes at 2
    let pair = sequence([kind(IDENTIFIER), kind(IDENTIFIER)]).unwrap();
    assert_eq!(collect_ranges(&pair, "a b c"), vec![0..2]);
    assert_eq!(collect_ranges(&pair, "a b c d"), vec![0..2, 2..4]);
}

#[test]
fn test_matches_never_overlap() {
    let three = repeat(any(), 3, Some(3)).unwrap();
    let tokens = lex("a b c d e f g h");
    let found: Vec<_> = find_all(&three, &tokens).collect();
    assert_eq!(found.len(), 2);
    for pair in found.windows(2) {
        assert!(pair[0].end() <= pair[1].start);
    }
}

#[test]
fn test_empty_matches() {
    let maybe_semicolon = optional(token(DELIMITER, ";")).unwrap();
    assert_eq!(collect_ranges(&maybe_semicolon, "a ; b ;"), vec![1..2, 3..4]);

    let tokens = lex("a ;");
    let reported: Vec<_> = Matcher::new(&maybe_semicolon)
        .with_options(MatchOptions::new().with_report_empty(true))
        .find_all(&tokens)
        .map(|m| m.range())
        .collect();
    assert_eq!(reported, vec![0..0, 1..2, 2..2]);
}

#[test]
fn test_lazy_early_stop() {
    let tokens = lex("BEGIN END BEGIN END BEGIN END");
    let mut iter = find_all(&block(), &tokens);
    assert_eq!(iter.next().map(|m| m.range()), Some(0..2));
    assert_eq!(iter.next().map(|m| m.range()), Some(2..4));
    drop(iter);

    assert_eq!(find_all(&block(), &tokens).count(), 3);
}

#[test]
fn test_fused() {
    let tokens = lex("BEGIN END");
    let begin = keyword("BEGIN");
    let mut iter = find_all(&begin, &tokens);
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_matched_tokens() {
    let tokens = lex("x BEGIN y END z");
    let texts: Vec<Vec<String>> = find_all(&block(), &tokens)
        .map(|m| m.tokens(&tokens).iter().map(ToString::to_string).collect())
        .collect();
    assert_eq!(texts, vec![vec!["BEGIN", "y", "END"]]);
}
