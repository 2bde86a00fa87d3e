use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static AS_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"As Of\s*(\w+ \d{1,2}, \d{4})").unwrap());

/// Locate the report's "As Of" date in raw page text.
///
/// The report prints it long-form ("November 15, 2024"); the result is
/// reformatted as MM/DD/YYYY. Returns None when the label is missing or the
/// date does not parse.
pub fn parse_as_of_date(text: &str) -> Option<String> {
    let caps = AS_OF.captures(text)?;
    let date = NaiveDate::parse_from_str(caps[1].trim(), "%B %d, %Y").ok()?;
    Some(date.format("%m/%d/%Y").to_string())
}
