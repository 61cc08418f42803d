use std::time::{SystemTime, UNIX_EPOCH};

use protocol::{AnalyzeOutcome, RawVerdict};

use crate::recover;

pub const DEFAULT_STATUS: &str = "Not Verified";
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_SUMMARY: &str = "Analysis completed";
pub const DEFAULT_REASONING: &str = "Evidence analyzed";
pub const DEFAULT_CONTEXT: &str = "Context available";
pub const DEFAULT_CONSISTENCY: &str = "Consistency evaluated";
pub const DEFAULT_RECOMMENDATIONS: &str = "Verify with official sources";
pub const DEFAULT_SOURCE: &str = "Sources consulted";
pub const DEFAULT_LANGUAGE: &str = "English";

/// Canonical verdict record. Every field is defined and renderable; absence
/// upstream never reaches the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub verification_status: String,
    pub confidence: f64,
    pub summary: String,
    pub reasoning: String,
    pub context: String,
    pub consistency: String,
    pub recommendations: String,
    pub sources: Vec<String>,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: u64,
    pub is_reliable: bool,
    pub detected_language: String,
}

/// Turns the raw outcome of an analyze call into a canonical record, or the
/// user-facing error message for a tagged failure. No retry either way.
pub fn normalize(outcome: AnalyzeOutcome) -> Result<AnalysisResult, String> {
    match outcome {
        AnalyzeOutcome::Ok(raw) => Ok(normalize_verdict(raw)),
        AnalyzeOutcome::Err(failure) => {
            tracing::warn!(tag = failure.tag(), "analysis service reported failure");
            Err(format!("Analysis error: {}", failure.message()))
        }
    }
}

pub fn normalize_verdict(raw: RawVerdict) -> AnalysisResult {
    let raw = recover::enrich_from_reasoning(raw);
    AnalysisResult {
        verification_status: coalesce(raw.verification_status, DEFAULT_STATUS),
        confidence: raw.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        summary: coalesce(raw.summary, DEFAULT_SUMMARY),
        reasoning: coalesce(raw.reasoning, DEFAULT_REASONING),
        context: coalesce(raw.context, DEFAULT_CONTEXT),
        consistency: coalesce(raw.consistency, DEFAULT_CONSISTENCY),
        recommendations: coalesce(raw.recommendations, DEFAULT_RECOMMENDATIONS),
        sources: match raw.sources {
            Some(sources) if !sources.is_empty() => sources,
            _ => vec![DEFAULT_SOURCE.to_string()],
        },
        timestamp: raw.timestamp.unwrap_or_else(now_ns),
        is_reliable: raw.is_reliable.unwrap_or(false),
        detected_language: coalesce(raw.detected_language, DEFAULT_LANGUAGE),
    }
}

fn coalesce(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback.to_string(),
    }
}

fn now_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::AnalysisFailure;

    #[test]
    fn empty_payload_gets_documented_defaults() {
        let result = normalize_verdict(RawVerdict::default());
        assert_eq!(result.verification_status, DEFAULT_STATUS);
        assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert_eq!(result.reasoning, DEFAULT_REASONING);
        assert_eq!(result.context, DEFAULT_CONTEXT);
        assert_eq!(result.consistency, DEFAULT_CONSISTENCY);
        assert_eq!(result.recommendations, DEFAULT_RECOMMENDATIONS);
        assert_eq!(result.sources, vec![DEFAULT_SOURCE.to_string()]);
        assert!(result.timestamp > 0);
        assert!(!result.is_reliable);
        assert_eq!(result.detected_language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let raw = RawVerdict {
            summary: Some("   ".to_string()),
            sources: Some(Vec::new()),
            ..RawVerdict::default()
        };
        let result = normalize_verdict(raw);
        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert_eq!(result.sources, vec![DEFAULT_SOURCE.to_string()]);
    }

    #[test]
    fn present_fields_pass_through() {
        let raw = RawVerdict {
            verification_status: Some("Verificado".to_string()),
            confidence: Some(0.93),
            summary: Some("Tally matches the official count".to_string()),
            timestamp: Some(42),
            is_reliable: Some(true),
            detected_language: Some("Spanish".to_string()),
            ..RawVerdict::default()
        };
        let result = normalize_verdict(raw);
        assert_eq!(result.verification_status, "Verificado");
        assert_eq!(result.confidence, 0.93);
        assert_eq!(result.summary, "Tally matches the official count");
        assert_eq!(result.timestamp, 42);
        assert!(result.is_reliable);
        assert_eq!(result.detected_language, "Spanish");
    }

    #[test]
    fn zero_confidence_is_kept() {
        let raw = RawVerdict {
            confidence: Some(0.0),
            ..RawVerdict::default()
        };
        assert_eq!(normalize_verdict(raw).confidence, 0.0);
    }

    #[test]
    fn embedded_verdict_in_reasoning_overrides_status() {
        let raw = RawVerdict {
            verification_status: Some("Not Verified".to_string()),
            reasoning: Some(r#"{"result": "Falso", "confidence": 0.9}"#.to_string()),
            ..RawVerdict::default()
        };
        let result = normalize_verdict(raw);
        assert_eq!(result.verification_status, "Falso");
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn failure_surfaces_prefixed_message_for_every_tag() {
        let failures = [
            AnalysisFailure::InvalidInput("empty text".to_string()),
            AnalysisFailure::ApiError("upstream 502".to_string()),
            AnalysisFailure::ParseError("bad verdict".to_string()),
            AnalysisFailure::Timeout("no answer".to_string()),
        ];
        for failure in failures {
            let message = failure.message().to_string();
            let surfaced = normalize(AnalyzeOutcome::Err(failure)).expect_err("failure outcome");
            assert_eq!(surfaced, format!("Analysis error: {message}"));
        }
    }
}
