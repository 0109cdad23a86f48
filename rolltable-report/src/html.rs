//! HTML rendering of result tables.
//!
//! Percentage cells get a `val-N` class so the stylesheet can bucket them
//! by strength: the number before the trailing `%` is divided by 20 and
//! floored, matching the buckets the stylesheet defines.

use std::fmt::Write as _;

use rolltable_core::numbers::floor_f64_to_i64;
use rolltable_core::{Die, ResultTable};

/// Page head with the stylesheet, up to and including the open table tag.
const HEAD: &str = include_str!("../assets/head.html");
const FOOT: &str = "</table></body></html>";

/// Render one table as rows of the report's single HTML table.
#[must_use]
pub fn render_fragment(table: &ResultTable) -> String {
    let mut out = String::new();
    let _ = write!(out, "\n<tr><th class=\"title\">{}</th>", table.title());
    for column in table.columns() {
        let _ = write!(out, "<th>{column}</th>");
    }
    out.push_str("</tr>");

    for row in table.rows() {
        out.push_str("\n<tr><td class=\"dices\">");
        for die in row.combination.dice() {
            let _ = write!(out, "{}", die_span(die));
        }
        out.push_str("</td>");
        for value in &row.values {
            let _ = write!(out, "{}", value_cell(value));
        }
        out.push_str("</tr>");
    }
    out
}

/// Render the whole report document around the given tables.
#[must_use]
pub fn render_document(tables: &[ResultTable]) -> String {
    let mut out = String::from(HEAD);
    for table in tables {
        out.push_str(&render_fragment(table));
    }
    out.push_str(FOOT);
    out
}

fn die_span(die: &Die) -> String {
    format!(
        "<span class=\"die {name}\" title=\"{name}\"></span>",
        name = die.name()
    )
}

fn value_cell(value: &str) -> String {
    match percent_bucket(value) {
        Some(bucket) => format!("<td class=\"val-{bucket}\">{value}</td>"),
        None => format!("<td>{value}</td>"),
    }
}

fn percent_bucket(value: &str) -> Option<i64> {
    let number: f64 = value.strip_suffix('%')?.parse().ok()?;
    Some(floor_f64_to_i64(number / 20.0) * 20)
}
