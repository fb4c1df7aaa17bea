//! Minimal vCard serialization.

use super::extract::ExtractedContact;

/// Maximum content-line length in octets (not characters) per RFC 6350 §3.2.
const FOLD_WIDTH: usize = 75;

/// Folds a content line at the maximum octet length.
///
/// Longer lines are broken by inserting CRLF + space at UTF-8 character
/// boundaries. The continuation space counts against the budget of the
/// line it opens.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 3);
    let mut budget = FOLD_WIDTH;

    for c in line.chars() {
        if c.len_utf8() > budget {
            out.push_str("\r\n ");
            budget = FOLD_WIDTH - 1;
        }
        out.push(c);
        budget -= c.len_utf8();
    }

    out
}

/// Serializes contacts as minimal vCard 4.0 records.
///
/// One `BEGIN:VCARD`/`END:VCARD` block per contact with CRLF terminators,
/// empty fields omitted, long lines folded. Values are written verbatim;
/// the output of [`super::extract_contacts`] on the result reproduces the
/// input contacts as long as their fields carry no surrounding whitespace.
#[must_use]
pub fn serialize_contacts(contacts: &[ExtractedContact]) -> String {
    let mut out = String::new();

    for contact in contacts {
        out.push_str("BEGIN:VCARD\r\n");
        out.push_str("VERSION:4.0\r\n");

        if !contact.name.is_empty() {
            out.push_str(&fold_line(&format!("FN:{}", contact.name)));
            out.push_str("\r\n");
        }

        if !contact.phone.is_empty() {
            out.push_str(&fold_line(&format!("TEL:{}", contact.phone)));
            out.push_str("\r\n");
        }

        out.push_str("END:VCARD\r\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:Jane Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn folds_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        assert!(folded.contains("\r\n "));

        let first: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first.len(), 75);
    }

    #[test]
    fn folds_only_at_char_boundaries() {
        // 日 is 3 octets in UTF-8
        let line = format!("FN:{}", "日".repeat(30));
        let folded = fold_line(&line);

        for part in folded.split("\r\n ") {
            assert!(part.is_char_boundary(part.len()));
        }
    }

    #[test]
    fn continuation_lines_stay_within_budget() {
        let line = "X".repeat(300);
        let folded = fold_line(&line);

        for segment in folded.split("\r\n") {
            // Continuation segments include their leading space
            assert!(segment.len() <= FOLD_WIDTH);
        }
    }

    #[test]
    fn empty_fields_are_omitted() {
        let output = serialize_contacts(&[ExtractedContact::new("Jane", "")]);
        assert!(output.contains("FN:Jane\r\n"));
        assert!(!output.contains("TEL:"));
    }

    #[test]
    fn serializes_one_block_per_contact() {
        let contacts = vec![
            ExtractedContact::new("Jane", "111"),
            ExtractedContact::new("John", "222"),
        ];
        let output = serialize_contacts(&contacts);
        assert_eq!(output.matches("BEGIN:VCARD\r\n").count(), 2);
        assert_eq!(output.matches("END:VCARD\r\n").count(), 2);
    }
}
