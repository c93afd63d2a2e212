//! Decoding of serialized job skill requirements

/// Decodes a job's requirement field into a canonical ordered list of
/// lowercase skill strings.
///
/// Source data mixes encodings: a JSON list, a Python-literal-shaped list
/// (`"['python', 'excel']"`), or a bare comma-separated string. Decoding is
/// done once at ingestion; every failure degrades to an empty list so the
/// scorer never sees malformed input and never errors.
pub struct RequirementParser;

impl RequirementParser {
    pub fn decode(value: Option<&str>) -> Vec<String> {
        let Some(raw) = value else {
            return Vec::new();
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return normalize(items);
        }

        if trimmed.starts_with('[') {
            return Self::decode_literal_list(trimmed).unwrap_or_default();
        }

        Self::split_commas(trimmed)
    }

    /// Parses `['a', 'b']`-shaped strings. Returns `None` on structural
    /// problems (missing bracket, unquoted item) so the caller degrades to
    /// an empty list.
    fn decode_literal_list(raw: &str) -> Option<Vec<String>> {
        let inner = raw.strip_prefix('[')?.strip_suffix(']')?.trim();
        if inner.is_empty() {
            return Some(Vec::new());
        }

        let mut items = Vec::new();
        for piece in inner.split(',') {
            let piece = piece.trim();
            let unquoted = strip_quotes(piece)?;
            if !unquoted.trim().is_empty() {
                items.push(unquoted.trim().to_lowercase());
            }
        }
        Some(items)
    }

    /// Comma-split fallback. Pieces without any alphanumeric content (e.g.
    /// a cell holding `"???"`) are dropped rather than surfaced as skills.
    fn split_commas(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|piece| piece.trim().to_lowercase())
            .filter(|piece| piece.chars().any(|c| c.is_alphanumeric()))
            .collect()
    }
}

fn normalize(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_quotes(piece: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if let Some(rest) = piece.strip_prefix(quote) {
            return rest.strip_suffix(quote);
        }
    }
    None
}
