//! The structured record produced from a free-text note.

use serde::{Deserialize, Serialize};

/// Fields extracted from a single note.
///
/// Produced by the rule-based parser or by an alternative extractor with the
/// same shape. Every optional field is independently absent when nothing
/// matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_met: Option<String>,
    /// RFC 3339 timestamp, or the raw phrase when it could not be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub remaining_text: String,
}

impl ParsedNote {
    /// Name used to look up duplicate contacts: English first, then Hebrew.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.english_name.as_deref().or(self.hebrew_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_english() {
        let note = ParsedNote {
            english_name: Some("Roi Shikler".to_string()),
            hebrew_name: Some("רועי שיקלר".to_string()),
            ..ParsedNote::default()
        };
        assert_eq!(note.display_name(), Some("Roi Shikler"));

        let hebrew_only = ParsedNote {
            hebrew_name: Some("רועי".to_string()),
            ..ParsedNote::default()
        };
        assert_eq!(hebrew_only.display_name(), Some("רועי"));
        assert!(ParsedNote::default().display_name().is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serializes_camel_case_and_skips_absent_fields() {
        let note = ParsedNote {
            english_name: Some("Dana".to_string()),
            follow_up_date: Some("2024-01-09T17:00:00.000Z".to_string()),
            tags: vec!["tech".to_string()],
            remaining_text: "likes climbing".to_string(),
            ..ParsedNote::default()
        };

        let json = serde_json::to_value(&note).expect("note should serialize");
        assert_eq!(json["englishName"], "Dana");
        assert_eq!(json["followUpDate"], "2024-01-09T17:00:00.000Z");
        assert_eq!(json["remainingText"], "likes climbing");
        assert!(json.get("hebrewName").is_none());
        assert!(json.get("company").is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn deserializes_partial_record_from_alternative_extractor() {
        let json = r#"{"englishName":"Gil Simsolo","company":"Waze"}"#;
        let note: ParsedNote = serde_json::from_str(json).expect("partial record should parse");
        assert_eq!(note.company.as_deref(), Some("Waze"));
        assert!(note.tags.is_empty());
        assert_eq!(note.remaining_text, "");
    }
}
