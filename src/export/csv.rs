//! CSV encoding and tolerant decoding of the visit collection.
//!
//! Output is one line per record with every value double-quoted, so a
//! sheet edited by hand in a spreadsheet can be read back. Newlines inside
//! values are flattened to spaces on the way out; that is the only change
//! a round trip makes.

use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::models::visit::{VisitRecord, assign_missing_ids};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use regex::Regex;
use std::sync::LazyLock;

/// MIME type for downloads of the exported file.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// A field is either fully double-quoted (doubled quotes inside) or a bare
/// run of non-comma characters.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"]|"")*"|[^,]+"#).expect("CSV token pattern is valid"));

/// Replaces every line break (`\r\n`, `\n`, `\r`) with a single space.
fn flatten(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Encodes `records` as CSV text: the header line, then one quoted line
/// per record. No trailing newline.
pub fn encode(records: &[VisitRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        let row: Vec<String> = Field::ALL.iter().map(|f| flatten(&record.get(*f))).collect();
        wtr.write_record(&row)?;
    }

    let body = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    let body = String::from_utf8(body).map_err(|e| AppError::Export(e.to_string()))?;

    let mut out = Field::header();
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body.trim_end_matches('\n'));
    }
    Ok(out)
}

/// Strips at most one quote from each end.
fn strip_outer_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Recovers a field value from a token: outer quotes off, `""` → `"`.
fn unquote(token: &str) -> String {
    strip_outer_quotes(token).replace("\"\"", "\"")
}

/// Splits a data line into raw tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}

/// Decodes CSV text into records.
///
/// Only a missing header is an error. Unknown columns are ignored, missing
/// ones keep the empty default, unreadable check-ins become an empty list,
/// a bad engagement becomes 3, and rows without a usable id get a fresh one.
pub fn decode(text: &str) -> AppResult<Vec<VisitRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| AppError::MalformedCsv("no header line".to_string()))?;

    let columns: Vec<Option<Field>> = header_line
        .split(',')
        .map(|h| Field::from_name(strip_outer_quotes(h)))
        .collect();

    let mut records: Vec<VisitRecord> = lines
        .map(|line| {
            let tokens = tokenize(line);
            let mut record = VisitRecord::default();
            for (i, column) in columns.iter().enumerate() {
                if let Some(field) = column {
                    let raw = tokens.get(i).copied().unwrap_or("");
                    record.set(*field, &unquote(raw));
                }
            }
            record
        })
        .collect();

    assign_missing_ids(&mut records);
    Ok(records)
}
