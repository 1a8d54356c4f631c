//! Absent-safe numeric coercion.
//!
//! Spreadsheet cells are free text. A cell that does not hold a finite number
//! becomes absent instead of failing the load.

/// Parses a cell as a finite number.
///
/// Accepts an optional sign, decimals, exponents, and comma thousands
/// separators in well-formed groups (`1,250,000`). Returns `None` for empty
/// cells, text, `NaN`, and infinities.
#[must_use]
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    let parsed = if cell.contains(',') {
        strip_thousands(cell)?.parse::<f64>().ok()?
    } else {
        cell.parse::<f64>().ok()?
    };

    parsed.is_finite().then_some(parsed)
}

/// Removes comma group separators, rejecting malformed grouping like `1,2`.
fn strip_thousands(cell: &str) -> Option<String> {
    let (integer, fraction) = match cell.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (cell, None),
    };
    let digits = integer.trim_start_matches(['+', '-']);

    let mut groups = digits.split(',');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let mut out: String = integer.chars().filter(|&c| c != ',').collect();
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Some(out)
}
