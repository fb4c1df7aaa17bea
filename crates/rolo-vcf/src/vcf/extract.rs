//! Lenient contact-field extraction.
//!
//! Pulls a display name (`FN`) and a telephone number (`TEL`) out of each
//! record of a vCard document. Extraction is total: any text input yields
//! a result, and missing or malformed fields degrade to empty strings
//! rather than errors. Callers that need validation (e.g. rejecting
//! phone-less contacts) check emptiness themselves.

use rolo_core::types::FieldPolicy;
use serde::{Deserialize, Serialize};

use super::scan;

/// A contact pulled out of one vCard record.
///
/// Derived, not persisted: a contact has no identity beyond its position
/// in the source document. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContact {
    /// Formatted name (`FN` property), possibly empty.
    pub name: String,
    /// Telephone number (`TEL` property value), possibly empty.
    pub phone: String,
}

impl ExtractedContact {
    /// Creates a contact from name and phone values.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Returns whether both fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty()
    }
}

/// Extracts contacts from a vCard document under the default first-wins
/// duplicate-field policy.
///
/// See [`extract_contacts_with`] for the scan rules.
#[must_use]
pub fn extract_contacts(document: &str) -> Vec<ExtractedContact> {
    extract_contacts_with(document, FieldPolicy::default())
}

/// Extracts contacts from a vCard document.
///
/// Records are delimited by the literal `BEGIN:VCARD` marker; one contact
/// is emitted per record, in source order. Within a record the scan is a
/// left-fold over trimmed lines:
///
/// - `FN:` supplies the name — the 3-byte prefix is stripped and the rest
///   is kept verbatim, with no further trimming.
/// - `TEL:` or `TEL;` supplies the phone — the text after the last colon,
///   trimmed. A `TEL;` line with no colon still counts as the record's
///   telephone property, with an empty value.
/// - Any other line is ignored.
///
/// `policy` decides which line wins when a field repeats within a record.
#[must_use]
#[tracing::instrument(skip(document), fields(input_len = document.len()))]
pub fn extract_contacts_with(document: &str, policy: FieldPolicy) -> Vec<ExtractedContact> {
    let records = scan::split_records(document);

    tracing::debug!(count = records.len(), "Split records");

    records
        .into_iter()
        .map(|record| scan_record(record, policy))
        .collect()
}

/// Scans one record's lines into a contact.
fn scan_record(record: &str, policy: FieldPolicy) -> ExtractedContact {
    scan::logical_lines(record)
        .fold(FieldAccumulator::default(), |acc, line| acc.absorb(line, policy))
        .finish()
}

/// Line-scan accumulator for a single record.
///
/// A fixed-shape value updated functionally per line; `None` marks a field
/// no line has supplied yet, which is what lets first-wins and last-wins
/// share one code path.
#[derive(Debug, Default)]
struct FieldAccumulator {
    name: Option<String>,
    phone: Option<String>,
}

impl FieldAccumulator {
    /// Absorbs one trimmed line.
    fn absorb(self, line: &str, policy: FieldPolicy) -> Self {
        if let Some(rest) = line.strip_prefix("FN:") {
            return Self {
                name: assign(self.name, rest.to_string(), policy),
                phone: self.phone,
            };
        }

        if line.starts_with("TEL:") || line.starts_with("TEL;") {
            let value = scan::tail_after_last_colon(line)
                .map(str::trim)
                .unwrap_or_default();
            return Self {
                name: self.name,
                phone: assign(self.phone, value.to_string(), policy),
            };
        }

        self
    }

    fn finish(self) -> ExtractedContact {
        ExtractedContact {
            name: self.name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        }
    }
}

/// Resolves a repeated field against the already-held value.
fn assign(held: Option<String>, incoming: String, policy: FieldPolicy) -> Option<String> {
    match policy {
        FieldPolicy::FirstWins => held.or(Some(incoming)),
        FieldPolicy::LastWins => Some(incoming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_yields_nothing() {
        assert!(extract_contacts("").is_empty());
        assert!(extract_contacts("FN:Jane Doe\nTEL:5550100").is_empty());
    }

    #[test]
    fn name_after_prefix_is_kept_verbatim() {
        let contacts = extract_contacts("BEGIN:VCARD\nFN: Jane Doe\nEND:VCARD");
        // Line trim ran before the prefix check; the value keeps its own
        // leading space.
        assert_eq!(contacts[0].name, " Jane Doe");
    }

    #[test]
    fn phone_with_type_params() {
        let contacts = extract_contacts("BEGIN:VCARD\nTEL;TYPE=CELL:+1 555-0100\nEND:VCARD");
        assert_eq!(contacts[0].phone, "+1 555-0100");
    }

    #[test]
    fn phone_without_params() {
        let contacts = extract_contacts("BEGIN:VCARD\nTEL:5550100\nEND:VCARD");
        assert_eq!(contacts[0].phone, "5550100");
    }

    #[test]
    fn phone_value_is_trimmed() {
        let contacts = extract_contacts("BEGIN:VCARD\nTEL: 5550100 \nEND:VCARD");
        assert_eq!(contacts[0].phone, "5550100");
    }

    #[test]
    fn record_without_fields_yields_empty_contact() {
        let contacts = extract_contacts("BEGIN:VCARD\nVERSION:4.0\nEND:VCARD");
        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].is_empty());
    }

    #[test]
    fn first_wins_keeps_earlier_lines() {
        let doc = "BEGIN:VCARD\nFN:First\nFN:Second\nTEL:111\nTEL:222\nEND:VCARD";
        let contacts = extract_contacts_with(doc, FieldPolicy::FirstWins);
        assert_eq!(contacts[0].name, "First");
        assert_eq!(contacts[0].phone, "111");
    }

    #[test]
    fn last_wins_keeps_later_lines() {
        let doc = "BEGIN:VCARD\nFN:First\nFN:Second\nTEL:111\nTEL:222\nEND:VCARD";
        let contacts = extract_contacts_with(doc, FieldPolicy::LastWins);
        assert_eq!(contacts[0].name, "Second");
        assert_eq!(contacts[0].phone, "222");
    }

    #[test]
    fn valueless_tel_counts_under_first_wins() {
        let doc = "BEGIN:VCARD\nTEL;TYPE=CELL\nTEL:5550100\nEND:VCARD";
        let contacts = extract_contacts_with(doc, FieldPolicy::FirstWins);
        assert_eq!(contacts[0].phone, "");

        let contacts = extract_contacts_with(doc, FieldPolicy::LastWins);
        assert_eq!(contacts[0].phone, "5550100");
    }

    #[test]
    fn lowercase_properties_are_ignored() {
        let contacts = extract_contacts("BEGIN:VCARD\nfn:jane\ntel:555\nEND:VCARD");
        assert!(contacts[0].is_empty());
    }

    #[test]
    fn contact_serializes_to_json() {
        let contact = ExtractedContact::new("Jane Doe", "5550100");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"name":"Jane Doe","phone":"5550100"}"#);
    }
}
