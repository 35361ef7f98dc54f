//! Structured campaign rejection reasons (PRD-09).
//!
//! Rejections are persisted as a single tagged structure. Older rows stored
//! freeform strings (occasionally double-JSON-encoded); [`from_legacy`]
//! normalizes those once at read time so no caller ever shape-sniffs.
//!
//! [`from_legacy`]: RejectionReason::from_legacy

use serde::{Deserialize, Serialize};

/// Why a campaign was rejected, and what the brand should change before
/// resubmitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReason {
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl RejectionReason {
    /// A rejection with reasons but no recommendations.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            reasons,
            recommendations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty() && self.recommendations.is_empty()
    }

    /// Normalize a legacy stored value into the tagged structure.
    ///
    /// Accepts, in order: the structure itself serialized as JSON, a
    /// JSON-encoded string, and a plain freeform string. Freeform text
    /// becomes a single entry in `reasons`.
    pub fn from_legacy(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        if let Ok(parsed) = serde_json::from_str::<RejectionReason>(trimmed) {
            if !parsed.is_empty() {
                return parsed;
            }
        }

        if let Ok(inner) = serde_json::from_str::<String>(trimmed) {
            if !inner.trim().is_empty() {
                return Self::from_reasons(vec![inner.trim().to_string()]);
            }
            return Self::default();
        }

        Self::from_reasons(vec![trimmed.to_string()])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_json_passes_through() {
        let raw = r#"{"reasons":["budget too low"],"recommendations":["raise to 2000"]}"#;
        let reason = RejectionReason::from_legacy(raw);
        assert_eq!(reason.reasons, vec!["budget too low"]);
        assert_eq!(reason.recommendations, vec!["raise to 2000"]);
    }

    #[test]
    fn json_encoded_string_is_unwrapped() {
        let reason = RejectionReason::from_legacy(r#""brief is unclear""#);
        assert_eq!(reason.reasons, vec!["brief is unclear"]);
        assert!(reason.recommendations.is_empty());
    }

    #[test]
    fn plain_freeform_becomes_single_reason() {
        let reason = RejectionReason::from_legacy("hashtag missing disclosure");
        assert_eq!(reason.reasons, vec!["hashtag missing disclosure"]);
    }

    #[test]
    fn empty_input_yields_empty_reason() {
        assert!(RejectionReason::from_legacy("").is_empty());
        assert!(RejectionReason::from_legacy("  ").is_empty());
        assert!(RejectionReason::from_legacy(r#""""#).is_empty());
    }

    #[test]
    fn partial_structure_fills_missing_fields() {
        let reason = RejectionReason::from_legacy(r#"{"reasons":["dates invalid"]}"#);
        assert_eq!(reason.reasons, vec!["dates invalid"]);
        assert!(reason.recommendations.is_empty());
    }
}
