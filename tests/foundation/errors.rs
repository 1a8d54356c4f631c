//! Error tests.

use valuetable_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn only_load_failures_are_fatal() {
    assert!(Error::load("unreadable").is_fatal());
    assert!(Error::missing_columns(vec!["Value".into()]).is_fatal());

    for err in [
        Error::invalid_criterion("price"),
        Error::invalid_filter("value >", "expected a number", 7),
        Error::missing_separator("<:for:1>"),
        Error::repeated_separator("<:for:1>"),
        Error::item_not_found("zzzznotreal"),
        Error::invalid_command("unknown command"),
        Error::new(ErrorKind::Internal("boom".into())),
    ] {
        assert!(!err.is_fatal(), "{err} should not be fatal");
    }
}

#[test]
fn codes_are_distinct() {
    let kinds = [
        ErrorKind::Load(String::new()),
        ErrorKind::MissingColumns(Vec::new()),
        ErrorKind::InvalidCriterion(String::new()),
        ErrorKind::InvalidFilterExpression {
            expression: String::new(),
            message: String::new(),
            offset: 0,
        },
        ErrorKind::MissingSeparator(String::new()),
        ErrorKind::RepeatedSeparator(String::new()),
        ErrorKind::ItemNotFound(String::new()),
        ErrorKind::InvalidCommand(String::new()),
        ErrorKind::Internal(String::new()),
    ];
    let mut codes: Vec<_> = kinds.iter().map(ErrorKind::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn messages_name_the_input() {
    assert!(Error::invalid_criterion("price").to_string().contains("'price'"));
    assert!(Error::item_not_found("Frost").to_string().contains("Frost"));
    assert!(
        Error::missing_separator("<:for:1>")
            .to_string()
            .contains("<:for:1>")
    );
}

#[test]
fn context_is_attached() {
    let err = Error::load("bad row")
        .with_context(ErrorContext::new().with_source("values.csv").with_row(4));
    let context = err.context.unwrap();
    assert_eq!(context.to_string(), "at values.csv, row 4");
}
