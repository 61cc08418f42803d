use serde::{Deserialize, Serialize};

pub mod config;

/// Request sent to the analysis service. The service contract is the text;
/// `id` is stamped client-side and only used for log correlation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub id: String,
    pub text: String,
}

/// Outcome of an analyze call. The service answers with an externally tagged
/// result: `{"ok": {...}}` on success, `{"err": {"<Tag>": "<message>"}}` on
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AnalyzeOutcome {
    #[serde(rename = "ok")]
    Ok(RawVerdict),
    #[serde(rename = "err")]
    Err(AnalysisFailure),
}

/// Success payload exactly as the service sends it. Every field is optional
/// on the wire; the analysis crate owns defaulting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVerdict {
    pub verification_status: Option<String>,
    pub confidence: Option<f64>,
    pub summary: Option<String>,
    pub reasoning: Option<String>,
    pub context: Option<String>,
    pub consistency: Option<String>,
    pub recommendations: Option<String>,
    pub sources: Option<Vec<String>>,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: Option<u64>,
    pub is_reliable: Option<bool>,
    pub detected_language: Option<String>,
}

/// Tagged failure returned by the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalysisFailure {
    InvalidInput(String),
    ApiError(String),
    ParseError(String),
    Timeout(String),
}

impl AnalysisFailure {
    pub fn tag(&self) -> &'static str {
        match self {
            AnalysisFailure::InvalidInput(_) => "InvalidInput",
            AnalysisFailure::ApiError(_) => "ApiError",
            AnalysisFailure::ParseError(_) => "ParseError",
            AnalysisFailure::Timeout(_) => "Timeout",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AnalysisFailure::InvalidInput(message)
            | AnalysisFailure::ApiError(message)
            | AnalysisFailure::ParseError(message)
            | AnalysisFailure::Timeout(message) => message,
        }
    }
}
