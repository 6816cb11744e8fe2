use rejex_rs::{BuilderError, Flavor, PatternBuilder, RegexFlags};

#[test]
fn add_flags_when_one_symbol_invalid_then_records_single_error_and_keeps_valid_flags() {
    let builder = PatternBuilder::with_flavor(Flavor::Go)
        .characters("abc")
        .add_flags(&['i', 'x', 'm']);

    assert_eq!(
        builder.flags(),
        RegexFlags::CASE_INSENSITIVE | RegexFlags::MULTILINE
    );

    let built = builder.build();
    assert_eq!(built.pattern(), "(?im)abc");
    assert_eq!(built.diagnostics().len(), 1);
    assert_eq!(
        built.diagnostics()[0].error,
        BuilderError::InvalidFlag {
            flag: 'x',
            flavor: Flavor::Go
        }
    );
}

#[test]
fn add_flags_when_symbol_belongs_to_other_flavor_then_rejects_it() {
    let builder = PatternBuilder::with_flavor(Flavor::Go).add_flags(&['g']);

    assert!(builder.flags().is_empty());
    assert_eq!(builder.diagnostics().len(), 1);
}

#[test]
fn add_flags_when_no_symbols_then_records_error() {
    let built = PatternBuilder::new().add_flags(&[]).build();
    assert_eq!(built.diagnostics()[0].error, BuilderError::NoFlagsProvided);
}

#[test]
fn remove_flags_clears_previously_added_flags() {
    let built = PatternBuilder::with_flavor(Flavor::Ecma)
        .characters("a")
        .add_flags(&['g', 'i', 'y'])
        .remove_flags(&['i'])
        .build();

    assert!(built.is_clean());
    assert_eq!(built.pattern(), "/a/gy");
}

#[test]
fn remove_flags_when_symbol_invalid_then_other_flags_untouched() {
    let builder = PatternBuilder::new()
        .add_flags(&['s'])
        .remove_flags(&['q']);

    assert_eq!(builder.flags(), RegexFlags::SINGLE_LINE);
    assert_eq!(builder.diagnostics().len(), 1);
}

#[test]
fn go_flags_serialize_as_leading_inline_group() {
    let built = PatternBuilder::new()
        .characters("a")
        .add_flags(&['U', 's', 'i', 'm'])
        .build();

    assert_eq!(built.pattern(), "(?imsU)a");
}

#[test]
fn go_without_flags_omits_inline_group() {
    let built = PatternBuilder::new().characters("a").build();
    assert_eq!(built.pattern(), "a");
}

#[test]
fn delimited_flavors_keep_empty_flag_suffix() {
    let ecma = PatternBuilder::with_flavor(Flavor::Ecma)
        .characters("a")
        .build();
    assert_eq!(ecma.pattern(), "/a/");

    let perl = PatternBuilder::with_flavor(Flavor::Perl)
        .characters("a")
        .add_flags(&['s', 'g'])
        .build();
    assert_eq!(perl.pattern(), "/a/gs");
}

#[test]
fn ecma_flags_follow_table_order() {
    let built = PatternBuilder::with_flavor(Flavor::Ecma)
        .characters("a")
        .add_flags(&['u', 'y', 'm', 'i', 'g'])
        .build();

    assert_eq!(built.pattern(), "/a/gimyu");
}
