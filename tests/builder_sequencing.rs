use rejex_rs::{BuilderError, Flavor, PatternBuilder, SegmentKind};

#[test]
fn builder_when_segments_appended_then_concatenates_in_call_order() {
    let built = PatternBuilder::new()
        .starting()
        .characters("ab")
        .digit()
        .any_char()
        .whitespace()
        .word_boundary()
        .ending()
        .build();

    assert!(built.is_clean());
    assert_eq!(built.pattern(), "^ab\\d.\\s\\b$");
}

#[test]
fn builder_when_seeded_without_calls_then_returns_seed_unmodified() {
    let seed = "foo(bar)?[a-z]+";
    let built = PatternBuilder::from_pattern(seed).build();

    assert!(built.is_clean());
    assert_eq!(built.pattern(), seed);
}

#[test]
fn builder_when_seeded_then_appends_after_seed() {
    let built = PatternBuilder::from_pattern("^id=").digit().build();
    assert_eq!(built.pattern(), "^id=\\d");
}

#[test]
fn not_when_called_once_then_emits_negated_alternate() {
    let built = PatternBuilder::new()
        .not()
        .digit()
        .not()
        .word_boundary()
        .not()
        .letter()
        .build();

    assert_eq!(built.pattern(), "\\D\\B[^a-zA-Z]");
}

#[test]
fn not_when_called_twice_then_cancels() {
    let built = PatternBuilder::new().not().not().digit().build();
    assert_eq!(built.pattern(), "\\d");
}

#[test]
fn not_when_no_segment_follows_then_has_no_effect() {
    let built = PatternBuilder::new().digit().not().build();
    assert!(built.is_clean());
    assert_eq!(built.pattern(), "\\d");
}

#[test]
fn not_when_segment_has_no_alternate_then_is_consumed_anyway() {
    let built = PatternBuilder::new()
        .not()
        .characters("x")
        .digit()
        .build();

    assert_eq!(built.pattern(), "x\\d");
}

#[test]
fn not_when_group_opened_then_applies_to_first_segment_inside() {
    let built = PatternBuilder::new()
        .not()
        .begin_capture_group()
        .whitespace()
        .end_group()
        .build();

    assert_eq!(built.pattern(), "(\\S)");
}

#[test]
fn quantifier_when_target_longer_than_one_char_then_wraps_in_non_capture_group() {
    let built = PatternBuilder::new()
        .digit()
        .one_or_more_of("ab")
        .zero_or_one_of("c")
        .zero_or_more_of("\\w")
        .build();

    assert_eq!(built.pattern(), "\\d(?:ab)+c?(?:\\w)*");
}

#[test]
fn counted_quantifiers_render_braces() {
    let built = PatternBuilder::new()
        .n_of("a", 3)
        .n_or_more_of("bc", 2)
        .n_to_m_of("d", 1, 4)
        .build();

    assert!(built.is_clean());
    assert_eq!(built.pattern(), "a{3}(?:bc){2,}d{1,4}");
}

#[test]
fn n_to_m_of_when_range_inverted_then_records_error_and_emits_nothing() {
    let built = PatternBuilder::new().n_to_m_of("a", 5, 2).build();

    assert_eq!(built.pattern(), "");
    assert_eq!(built.diagnostics().len(), 1);
    assert_eq!(
        built.diagnostics()[0].error,
        BuilderError::InvalidRepetitionRange { min: 5, max: 2 }
    );
}

#[test]
fn quantifier_when_target_empty_then_records_error() {
    let built = PatternBuilder::new().one_or_more_of("").build();

    assert_eq!(built.pattern(), "");
    assert_eq!(built.diagnostics()[0].error, BuilderError::EmptyQuantifierTarget);
}

#[test]
fn prefer_fewer_when_after_quantifier_then_appends_lazy_marker() {
    let builder = PatternBuilder::new().zero_or_more_of("a");
    assert_eq!(builder.last_segment(), Some(SegmentKind::Quantifier));

    let built = builder.prefer_fewer().build();
    assert!(built.is_clean());
    assert_eq!(built.pattern(), "a*?");
}

#[test]
fn prefer_fewer_when_not_after_quantifier_then_records_error() {
    let built = PatternBuilder::new().digit().prefer_fewer().build();

    assert_eq!(built.pattern(), "\\d");
    match &built.diagnostics()[0].error {
        BuilderError::ModifierWithoutQuantifier { modifier } => {
            assert_eq!(*modifier, "prefer_fewer");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prefer_fewer_when_repeated_then_second_call_is_rejected() {
    let built = PatternBuilder::new()
        .one_or_more_of("a")
        .prefer_fewer()
        .prefer_fewer()
        .build();

    assert_eq!(built.pattern(), "a+?");
    assert_eq!(built.diagnostics().len(), 1);
}

#[test]
fn or_and_either_or_emit_alternation() {
    let built = PatternBuilder::new()
        .characters("a")
        .or()
        .either_or(&["cat", "dog", "bird"])
        .build();

    assert_eq!(built.pattern(), "a|(?:cat|dog|bird)");
}

#[test]
fn either_or_when_fewer_than_two_options_then_records_error() {
    let built = PatternBuilder::new().either_or(&["only"]).build();

    assert_eq!(built.pattern(), "");
    assert_eq!(
        built.diagnostics()[0].error,
        BuilderError::NotEnoughAlternatives { provided: 1 }
    );
}

#[test]
fn escaped_characters_escape_metacharacters() {
    let built = PatternBuilder::new().escaped_characters("1+1=2?").build();
    assert_eq!(built.pattern(), "1\\+1=2\\?");

    let ecma = PatternBuilder::with_flavor(Flavor::Ecma)
        .escaped_characters("a/b.c")
        .build();
    assert_eq!(ecma.pattern(), "/a\\/b\\.c/");
}

#[test]
fn diagnostics_record_top_level_output_length() {
    let built = PatternBuilder::new()
        .characters("abc")
        .end_group()
        .characters("de")
        .end_selection_set()
        .build();

    let positions: Vec<usize> = built.diagnostics().iter().map(|d| d.position).collect();
    assert_eq!(positions, vec![3, 5]);
}

#[test]
fn go_output_compiles_with_regex_crate() {
    let built = PatternBuilder::new()
        .starting()
        .begin_named_capture_group("year")
        .n_of("\\d", 4)
        .end_group()
        .characters("-")
        .begin_non_capture_group()
        .uppercase()
        .or()
        .unicode_lowercase()
        .end_group()
        .zero_or_more_of(".")
        .prefer_fewer()
        .hex_char("41")
        .ending()
        .add_flags(&['i', 's'])
        .build();

    let pattern = built.into_result().expect("pattern should have no diagnostics");
    let compiled = regex::Regex::new(&pattern).expect("pattern should compile");
    let caps = compiled.captures("2024-Xa").expect("pattern should match");
    assert_eq!(&caps["year"], "2024");
}
