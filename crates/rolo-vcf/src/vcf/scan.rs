//! vCard scanning: record splitting, line iteration, and unfolding.
//!
//! Everything here is total — scanning never rejects input. Folding rules
//! follow RFC 6350 §3.2 (shared with iCalendar, RFC 5545 §3.1).

/// Marker that opens a vCard record.
pub const RECORD_MARKER: &str = "BEGIN:VCARD";

/// Splits a document into record segments on the literal `BEGIN:VCARD`
/// marker.
///
/// Text before the first marker is preamble and never a record. Segments
/// that trim to nothing (e.g. between back-to-back markers) are dropped.
/// A document with no marker yields no records.
#[must_use]
pub fn split_records(document: &str) -> Vec<&str> {
    let mut segments = document.split(RECORD_MARKER);
    let _preamble = segments.next();

    segments
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Iterates a record's lines, split on `\r\n` or `\n`, trimmed of
/// surrounding whitespace, with blank lines skipped.
#[must_use]
pub fn logical_lines(record: &str) -> impl Iterator<Item = &str> {
    record.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Returns the text after the *last* `:` in `line`, or `None` when the
/// line carries no colon.
///
/// Taking the last colon rather than the first skips parameter lists
/// (`TEL;TYPE=tel:ish;PREF=1:value`) that may themselves contain the
/// delimiter before the value.
#[must_use]
pub fn tail_after_last_colon(line: &str) -> Option<&str> {
    line.rfind(':').map(|idx| &line[idx + 1..])
}

/// Unfolds a vCard document by removing line continuations.
///
/// A continuation is a line terminator followed by a single space or tab.
/// CRLF is the RFC terminator; bare LF is accepted leniently. Terminators
/// that survive are normalized to `\n`.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let terminator = match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                true
            }
            '\n' => true,
            _ => {
                out.push(c);
                false
            }
        };

        if terminator {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                // Swallow the fold marker, the logical line continues
                chars.next();
            } else {
                out.push('\n');
            }
        }
    }

    out
}
