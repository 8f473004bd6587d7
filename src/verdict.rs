use serde::{Deserialize, Serialize};

/// Whether a test case ran to completion or died on a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Ok,
    Error,
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictStatus::Ok => write!(f, "ok"),
            VerdictStatus::Error => write!(f, "error"),
        }
    }
}

/// The structured outcome of one metamorphic comparison for one input
/// sentence. Immutable once built; one verdict per input.
///
/// Error verdicts keep whatever partial results were obtained before the
/// failure, so a transformed-query failure still records the original
/// prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVerdict {
    pub original_text: String,
    pub original_pred: Option<String>,
    pub transformed_text: Option<String>,
    pub transformed_pred: Option<String>,
    pub passed: Option<bool>,
    pub status: VerdictStatus,
    pub error: Option<String>,
}

impl TestVerdict {
    /// A completed comparison: both predictions obtained, pass decided.
    pub fn completed(
        original_text: String,
        original_pred: String,
        transformed_text: String,
        transformed_pred: String,
    ) -> Self {
        let passed = labels_agree(&original_pred, &transformed_pred);
        TestVerdict {
            original_text,
            original_pred: Some(original_pred),
            transformed_text: Some(transformed_text),
            transformed_pred: Some(transformed_pred),
            passed: Some(passed),
            status: VerdictStatus::Ok,
            error: None,
        }
    }

    /// A recovered per-input failure. Partial results stay attached.
    pub fn errored(
        original_text: String,
        original_pred: Option<String>,
        transformed_text: Option<String>,
        error: String,
    ) -> Self {
        TestVerdict {
            original_text,
            original_pred,
            transformed_text,
            transformed_pred: None,
            passed: None,
            status: VerdictStatus::Error,
            error: Some(error),
        }
    }
}

/// The metamorphic relation's pass criterion: exact label equality,
/// case-insensitive. No fuzzy matching, no label-taxonomy mapping.
pub fn labels_agree(original: &str, transformed: &str) -> bool {
    original.trim().to_lowercase() == transformed.trim().to_lowercase()
}
