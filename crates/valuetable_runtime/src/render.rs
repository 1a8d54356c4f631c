//! Response rendering.
//!
//! Turns structured [`Response`]s and errors into text or JSON for stdout.

use std::fmt::Write;

use serde_json::json;
use valuetable_engine::{
    Criterion, Fairness, HelpTopic, ItemComparison, LineOutcome, Response, SideBreakdown,
    TradeParty, TradeResult,
};
use valuetable_foundation::{Error, ErrorKind, Result};
use valuetable_parser::ResolvedMatch;
use valuetable_storage::ItemRecord;

use crate::config::OutputFormat;

/// Renders a response.
///
/// # Errors
/// Returns an `Internal` error if JSON serialization fails.
pub fn render(response: &Response, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(response)),
        OutputFormat::Json => serde_json::to_string_pretty(response)
            .map_err(|e| Error::new(ErrorKind::Internal(format!("cannot encode response: {e}")))),
    }
}

/// Renders an error.
#[must_use]
pub fn render_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match &error.context {
            Some(context) => format!("Error: {error} ({context})"),
            None => format!("Error: {error}"),
        },
        OutputFormat::Json => json!({
            "error": {
                "code": error.kind.code(),
                "message": error.to_string(),
                "context": error.context.as_ref().map(ToString::to_string),
            }
        })
        .to_string(),
    }
}

/// Renders a response as human-readable text.
#[must_use]
pub fn render_text(response: &Response) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = match response {
        Response::Lookup(found) => write_lookup(&mut out, found),
        Response::Ranking {
            criterion,
            requested,
            items,
        } => write_ranking(&mut out, *criterion, *requested, items),
        Response::Filtered { expression, items } => write_filtered(&mut out, expression, items),
        Response::Comparison(comparison) => write_comparison(&mut out, comparison),
        Response::Trade(result) => write_trade(&mut out, result),
        Response::Help(topics) => write_help(&mut out, topics),
    };
    out.truncate(out.trim_end().len());
    out
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn signed(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{v}"),
        other => cell(other),
    }
}

fn write_record(out: &mut String, record: &ItemRecord) -> std::fmt::Result {
    writeln!(out, "{}", record.name)?;
    writeln!(out, "  Demand: {}/10", cell(record.demand))?;
    writeln!(out, "  Value: {}", cell(record.value))?;
    writeln!(out, "  Rate of change: {}", cell(record.rate_of_change))
}

fn write_suggestions(out: &mut String, names: &[String]) -> std::fmt::Result {
    writeln!(out, "Item not found. Did you mean one of these?")?;
    for name in names {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

fn write_lookup(out: &mut String, found: &ResolvedMatch) -> std::fmt::Result {
    match found {
        ResolvedMatch::Unique(record) => write_record(out, record),
        ResolvedMatch::Ambiguous(names) => write_suggestions(out, names),
        ResolvedMatch::NotFound => {
            writeln!(out, "Item not found. Please check the name and try again.")
        }
    }
}

fn write_ranking(
    out: &mut String,
    criterion: Criterion,
    requested: usize,
    items: &[ItemRecord],
) -> std::fmt::Result {
    match criterion {
        Criterion::RateOfChange => writeln!(out, "Top {requested} items by rate of change:")?,
        other => writeln!(out, "Top {requested} items by {other}:")?,
    }
    if items.is_empty() {
        return writeln!(out, "No items have a {criterion} listed.");
    }
    for (rank, record) in items.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (demand {}/10, value {}, rate of change {})",
            rank + 1,
            record.name,
            cell(record.demand),
            cell(record.value),
            cell(record.rate_of_change)
        )?;
    }
    Ok(())
}

fn write_filtered(out: &mut String, expression: &str, items: &[ItemRecord]) -> std::fmt::Result {
    if items.is_empty() {
        return writeln!(out, "No items match `{expression}`.");
    }
    writeln!(out, "Items matching `{expression}`:")?;
    for record in items {
        writeln!(
            out,
            "- {} (demand {}/10, value {}, rate of change {})",
            record.name,
            cell(record.demand),
            cell(record.value),
            cell(record.rate_of_change)
        )?;
    }
    Ok(())
}

fn write_side(out: &mut String, label: &str, found: &ResolvedMatch) -> std::fmt::Result {
    write!(out, "{label}: ")?;
    match found {
        ResolvedMatch::Unique(record) => write_record(out, record),
        ResolvedMatch::Ambiguous(names) => {
            writeln!(out)?;
            write_suggestions(out, names)
        }
        ResolvedMatch::NotFound => writeln!(out, "not found"),
    }
}

fn write_comparison(out: &mut String, comparison: &ItemComparison) -> std::fmt::Result {
    write_side(out, "Left", &comparison.left)?;
    write_side(out, "Right", &comparison.right)?;
    if let Some(differences) = &comparison.differences {
        writeln!(out, "Difference (left - right):")?;
        writeln!(out, "  Demand: {}", signed(differences.demand))?;
        writeln!(out, "  Value: {}", signed(differences.value))?;
        writeln!(out, "  Rate of change: {}", signed(differences.rate_of_change))?;
    }
    Ok(())
}

fn write_breakdown(out: &mut String, label: &str, side: &SideBreakdown) -> std::fmt::Result {
    writeln!(out, "{label}:")?;
    for line in &side.lines {
        write!(out, "  {} x{} - ", line.raw_name, line.quantity)?;
        match &line.outcome {
            LineOutcome::Priced {
                item_name,
                unit_value,
                line_total,
            } => writeln!(
                out,
                "{item_name}: {unit_value:>5} each (Total: {line_total:>6})"
            )?,
            LineOutcome::Unpriced { item_name } => writeln!(out, "{item_name}: no value listed")?,
            LineOutcome::NotFound => writeln!(out, "Not Found")?,
        }
    }
    for ignored in &side.ignored {
        writeln!(out, "  Ignored '{}': {}", ignored.token, ignored.reason)?;
    }
    writeln!(out, "  Total value: {:>6}", side.total)
}

fn write_trade(out: &mut String, result: &TradeResult) -> std::fmt::Result {
    write_breakdown(out, "Your trade", &result.mine)?;
    write_breakdown(out, "Their trade", &result.theirs)?;
    let verdict = match result.verdict {
        Fairness::Fair => "Fair trade!",
        Fairness::Overpaying(TradeParty::Mine) => "Your trade is overpaying!",
        Fairness::Overpaying(TradeParty::Theirs) => "Their trade is overpaying!",
    };
    writeln!(out, "Result: {verdict} (difference {})", result.difference)
}

fn write_help(out: &mut String, topics: &[HelpTopic]) -> std::fmt::Result {
    writeln!(out, "Available commands (prefix with ! optionally):")?;
    for topic in topics {
        writeln!(out, "{}: `{}`", topic.title, topic.usage)?;
        writeln!(out, "    {}", topic.summary)?;
        writeln!(out, "    Example: {}", topic.example)?;
    }
    Ok(())
}
