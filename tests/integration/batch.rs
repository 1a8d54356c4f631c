//! Batch mode.

use valuetable_runtime::{BatchSummary, OutputFormat, RuntimeConfig, run_batch};

use crate::{SAMPLE_CSV, dataset};

fn run(input: &str, format: OutputFormat) -> (BatchSummary, String, String) {
    let file = dataset(SAMPLE_CSV);
    let (engine, _) = RuntimeConfig::new()
        .with_dataset(file.path())
        .load_engine()
        .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_batch(&engine, format, input.as_bytes(), &mut out, &mut err).unwrap();
    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn answers_each_line_in_order() {
    let (summary, out, err) = run(
        "top 1 value\n# a comment\n\nfilter value > 60\nrecent 1\n",
        OutputFormat::Text,
    );
    assert_eq!(
        summary,
        BatchSummary {
            answered: 3,
            failed: 0
        }
    );
    assert!(err.is_empty());
    let top = out.find("Top 1 items by value").unwrap();
    let filtered = out.find("Items matching `value > 60`").unwrap();
    let recent = out.find("Top 1 items by rate of change").unwrap();
    assert!(top < filtered && filtered < recent);
}

#[test]
fn failures_go_to_the_error_stream() {
    let (summary, out, err) = run("value zzzznotreal\nhelp\n", OutputFormat::Text);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.answered, 1);
    assert!(err.contains("item not found: zzzznotreal"));
    assert!(out.contains("Available commands"));
}

#[test]
fn json_errors_carry_codes() {
    let (_, _, err) = run("filter value >\n", OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(err.trim()).unwrap();
    assert_eq!(json["error"]["code"], "invalid_filter_expression");
}
