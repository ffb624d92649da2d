//! Kenteken (license plate) value object

use serde::{Deserialize, Serialize};

/// Canonicalize a free-form license plate into the RDW lookup key.
///
/// Uppercases every letter and drops hyphens and whitespace anywhere in the
/// input. No other validation is applied: an input that normalizes to the
/// empty string is still a valid key that simply matches nothing.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized Dutch license plate (Value Object)
///
/// Always holds the canonical form produced by [`normalize_identifier`],
/// so `Kenteken::parse("41-tdk-8") == Kenteken::parse("41TDK8")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kenteken(String);

impl Kenteken {
    /// Normalize and wrap a raw identifier
    pub fn parse(raw: &str) -> Self {
        Self(normalize_identifier(raw))
    }

    /// The canonical lookup key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Kenteken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Kenteken {
    fn from(s: &str) -> Self {
        Kenteken::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_case_are_ignored() {
        assert_eq!(normalize_identifier("41-TDK-8"), "41TDK8");
        assert_eq!(normalize_identifier("41 tdk 8"), "41TDK8");
        assert_eq!(normalize_identifier("41TDK8"), "41TDK8");
        assert_eq!(normalize_identifier("  23-bgv-9\t"), "23BGV9");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["41-tdk-8", " al 06 45 ", "OV-69-ZV", "", "---"] {
            let once = normalize_identifier(raw);
            assert_eq!(normalize_identifier(&once), once);
        }
    }

    #[test]
    fn test_empty_after_normalization() {
        let k = Kenteken::parse(" - - ");
        assert!(k.is_empty());
        assert_eq!(k.as_str(), "");
    }

    #[test]
    fn test_kenteken_equality_uses_canonical_form() {
        assert_eq!(Kenteken::parse("bb-943-z"), Kenteken::from("BB943Z"));
        assert_eq!(Kenteken::parse("bb-943-z").to_string(), "BB943Z");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Kenteken::parse("41-tdk-8")).unwrap();
        assert_eq!(json, "\"41TDK8\"");
    }
}
