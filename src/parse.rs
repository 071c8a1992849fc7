//! Line sanitizer and parser: raw registry lines → `Record`s.
//!
//! Every line is an independent unit of work. Lines are fanned out over the rayon pool and the
//! per-line results are merged after the join, so no shared list is locked per append and the
//! merged order is the input order.

use crate::grouping::upper_invariant;
use crate::record::Record;
use rayon::prelude::*;

/// Minimum number of `;`-separated parts for a line to be accepted. Extra parts are ignored.
pub const MIN_FIELDS: usize = 5;

const HEADER_MARKERS: [&str; 2] = ["IBGE", "UF"];

/// Remove every `"` and trim surrounding whitespace.
pub fn sanitize_field(s: &str) -> String {
    s.replace('"', "").trim().to_string()
}

/// True when `line` looks like the registry header (contains `IBGE` or `UF`, any case).
pub fn has_header(line: &str) -> bool {
    let upper = line.to_ascii_uppercase();
    HEADER_MARKERS.iter().any(|m| upper.contains(m))
}

/// Index of the first data line: 1 when line 0 is a header, else 0.
pub fn header_offset<S: AsRef<str>>(lines: &[S]) -> usize {
    match lines.first() {
        Some(first) if has_header(first.as_ref()) => 1,
        _ => 0,
    }
}

/// Parse a single line. Returns `None` for blank lines or lines with fewer than five fields.
pub fn parse_line(line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() < MIN_FIELDS {
        return None;
    }
    Some(Record {
        code_a: sanitize_field(parts[0]),
        code_b: sanitize_field(parts[1]),
        name_a: sanitize_field(parts[2]),
        name_b: sanitize_field(parts[3]),
        region: upper_invariant(&sanitize_field(parts[4])),
    })
}

/// Parse all lines in parallel, skipping the header when present.
pub fn parse_lines<S>(lines: &[S]) -> Vec<Record>
where
    S: AsRef<str> + Sync,
{
    let start = header_offset(lines);
    lines[start..]
        .par_iter()
        .filter_map(|l| parse_line(l.as_ref()))
        .collect()
}

/// Split raw source text into lines (`\n` or `\r\n`), dropping a leading UTF-8 BOM.
pub fn split_lines(text: &str) -> Vec<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().collect()
}
