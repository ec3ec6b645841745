/// Status classification for case entries.
///
/// Case statuses come from hand-edited front matter in two languages, sometimes with the
/// accents transliterated away. `classify` folds them onto four canonical categories and
/// `label` renders the Hungarian display string for the sidebar badge.
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::escape::value_to_text;

/// Placeholder label for a missing or empty status.
pub const UNKNOWN_LABEL: &str = "ismeretlen";

/// Canonical resolution state of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Open,
    Answered,
    Followup,
    Unknown,
}

/// Normalized spelling → category. Accent-folded duplicates are intentional.
const SYNONYMS: &[(&str, StatusCategory)] = &[
    ("nyitott", StatusCategory::Open),
    ("open", StatusCategory::Open),
    ("megválaszolt", StatusCategory::Answered),
    ("megvalaszolt", StatusCategory::Answered),
    ("answered", StatusCategory::Answered),
    ("reply_only", StatusCategory::Answered),
    ("további kérdéseket felvető", StatusCategory::Followup),
    ("tovabbi kerdeseket felveto", StatusCategory::Followup),
    ("followup", StatusCategory::Followup),
    ("follow_up", StatusCategory::Followup),
];

impl StatusCategory {
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::Open,
        StatusCategory::Answered,
        StatusCategory::Followup,
        StatusCategory::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Open => "open",
            StatusCategory::Answered => "answered",
            StatusCategory::Followup => "followup",
            StatusCategory::Unknown => "unknown",
        }
    }

    /// Hungarian display label.
    pub fn display_label(self) -> &'static str {
        match self {
            StatusCategory::Open => "nyitott",
            StatusCategory::Answered => "megválaszolt",
            StatusCategory::Followup => "további kérdéseket felvető",
            StatusCategory::Unknown => UNKNOWN_LABEL,
        }
    }

    /// Style modifier the site CSS keys badge colors on, e.g. `vsbz-status--open`.
    pub fn css_class(self) -> String {
        format!("vsbz-status--{}", self.as_str())
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify any status value. Never fails: anything unrecognized is `Unknown`.
pub fn classify(status: Option<&Value>) -> StatusCategory {
    if is_falsy(status) {
        return StatusCategory::Unknown;
    }
    classify_str(&value_to_text(status))
}

/// Classify a plain string: trimmed, lower-cased, exact match against the synonym table.
pub fn classify_str(status: &str) -> StatusCategory {
    let normalized = status.trim().to_lowercase();
    if normalized.is_empty() {
        return StatusCategory::Unknown;
    }
    SYNONYMS
        .iter()
        .find(|(spelling, _)| *spelling == normalized)
        .map(|(_, category)| *category)
        .unwrap_or(StatusCategory::Unknown)
}

/// Display label for a status value.
///
/// Unrecognized but non-empty strings are passed through verbatim so the odd value
/// stays visible in the sidebar; everything else unrecognized gets `ismeretlen`.
pub fn label(status: Option<&Value>) -> String {
    match classify(status) {
        StatusCategory::Unknown => match status {
            Some(Value::String(raw)) if !raw.is_empty() => raw.clone(),
            _ => UNKNOWN_LABEL.to_string(),
        },
        category => category.display_label().to_string(),
    }
}

/// `None`, `null`, `false`, `0` and `""` carry no status at all.
fn is_falsy(status: Option<&Value>) -> bool {
    match status {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}
