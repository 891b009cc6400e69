use rstest::rstest;
use tokpred::{
    Error, Predicate, Result, alternative, any, keyword, not, optional, repeat, sequence,
};

fn maybe_end() -> Predicate {
    optional(keyword("END")).unwrap()
}

#[rstest]
#[case::star_over_optional(repeat(maybe_end(), 0, None))]
#[case::plus_over_optional(repeat(maybe_end(), 1, None))]
#[case::star_over_star(repeat(repeat(any(), 0, Some(4)).unwrap(), 0, None))]
#[case::star_over_sequence_of_optionals(repeat(
    sequence([maybe_end(), maybe_end()]).unwrap(),
    3,
    None
))]
#[case::star_over_nullable_alternative(repeat(
    alternative([keyword("BEGIN"), maybe_end()]).unwrap(),
    0,
    None
))]
fn zero_width_unbounded_repetition_is_rejected(#[case] built: Result<Predicate>) {
    assert_eq!(built, Err(Error::ZeroWidthRepetition));
}

#[rstest]
#[case::bounded_over_optional(repeat(maybe_end(), 0, Some(3)))]
#[case::star_over_token(repeat(keyword("END"), 0, None))]
#[case::star_over_negation(repeat(not(maybe_end()).unwrap(), 0, None))]
#[case::star_over_mixed_sequence(repeat(
    sequence([maybe_end(), any()]).unwrap(),
    0,
    None
))]
fn terminating_repetition_is_accepted(#[case] built: Result<Predicate>) {
    assert!(built.is_ok(), "{built:?}");
}

#[rstest]
#[case(3, 2)]
#[case(1, 0)]
#[case(usize::MAX, 7)]
fn inverted_bounds_are_rejected(#[case] min: usize, #[case] max: usize) {
    assert_eq!(
        repeat(any(), min, Some(max)),
        Err(Error::RepetitionBounds { min, max })
    );
}

#[test]
fn empty_composites_are_rejected() {
    assert_eq!(sequence(Vec::new()), Err(Error::EmptySequence));
    assert_eq!(alternative(Vec::new()), Err(Error::EmptyAlternative));
}

#[test]
fn errors_surface_through_nesting() {
    // the inner failure is reported and no outer node is built
    let built = repeat(maybe_end(), 0, None).and_then(|inner| sequence([keyword("BEGIN"), inner]));
    assert_eq!(built, Err(Error::ZeroWidthRepetition));
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::RepetitionBounds { min: 3, max: 2 }.to_string(),
        "invalid repetition bounds (3 > 2)"
    );
    assert_eq!(
        Error::ZeroWidthRepetition.to_string(),
        "unbounded repetition of an item that can match zero tokens"
    );
    assert_eq!(
        Error::TooDeep { depth: 501 }.to_string(),
        "predicate nesting too deep (501 > 500)"
    );
}

#[test]
fn single_children_are_valid() {
    let single = sequence([keyword("GO")]).unwrap();
    assert_eq!(single.length_bounds().min, 1);
    let choice = alternative([keyword("GO")]).unwrap();
    assert_eq!(choice.length_bounds().max, Some(1));
}

#[test]
fn predicates_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Predicate>();
}
