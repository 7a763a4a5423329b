//! Terminal rendering for survey results.
//!
//! The original app drew results with a charting library; here the chart is
//! a horizontal bar per option, scaled to the widest count.

use scrutin_core::{ResultRow, ResultSeries};

/// Widest bar drawn, in characters.
const MAX_BAR_WIDTH: usize = 40;

/// Render a result series as a horizontal bar chart, one line per label.
#[must_use]
pub fn bar_chart(series: &ResultSeries) -> String {
    if series.is_empty() {
        return "(no responses yet)".to_string();
    }

    let label_width = series.labels.iter().map(String::len).max().unwrap_or(0);
    let max_value = series.values.iter().copied().max().unwrap_or(0).max(0);

    series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, &value)| {
            let bar = "█".repeat(bar_length(value, max_value));
            format!("{label:<label_width$}  {bar} {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render result rows as a two-column table.
#[must_use]
pub fn results_table(rows: &[ResultRow]) -> String {
    let label_width = rows
        .iter()
        .map(|r| r.text.len())
        .max()
        .unwrap_or(0)
        .max("Option".len());

    let mut out = format!("{:<label_width$}  Votes", "Option");
    for row in rows {
        out.push('\n');
        out.push_str(&format!("{:<label_width$}  {}", row.text, row.count));
    }
    out
}

/// Scale a value against the chart maximum. The widest value fills the
/// chart; a zero maximum draws nothing.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)] // Vote counts will never exceed f64 precision
fn bar_length(value: i64, max_value: i64) -> usize {
    if max_value <= 0 || value <= 0 {
        return 0;
    }
    let scaled = (value as f64 / max_value as f64) * MAX_BAR_WIDTH as f64;
    (scaled.round() as usize).max(1)
}

/// "yes" / "no" for boolean profile fields.
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
