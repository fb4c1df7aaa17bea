use serde::Deserialize;

/// Policy for a field that appears more than once in a single record.
///
/// Extraction scans a record's lines front to back; this decides whether
/// the first or the last matching line supplies the field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// The first matching line is kept; later lines are ignored.
    #[default]
    FirstWins,
    /// Every matching line reassigns the field; the last one is kept.
    LastWins,
}

impl FieldPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstWins => "first_wins",
            Self::LastWins => "last_wins",
        }
    }
}

impl std::fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encoding for extracted contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One compact JSON array per input.
    #[default]
    Json,
    /// Pretty-printed JSON array.
    JsonPretty,
    /// Tab-separated `name<TAB>phone` lines.
    Text,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JsonPretty => "json_pretty",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
