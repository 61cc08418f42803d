use protocol::RawVerdict;
use serde::Deserialize;

/// Marker that the service nested an encoded verdict object inside the
/// free-text `reasoning` field, in plain or once-escaped form.
const RESULT_MARKER: &str = "\"result\"";
const ESCAPED_RESULT_MARKER: &str = "\\\"result\\\"";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmbeddedVerdict {
    result: Option<String>,
    confidence: Option<f64>,
    summary: Option<String>,
    reasoning: Option<String>,
    context: Option<String>,
    consistency: Option<String>,
    recommendations: Option<String>,
}

/// Best-effort recovery of a verdict object embedded in `reasoning`. When the
/// marker is present, the text between the first `{` and the last `}` is
/// decoded (after undoing one escape level if needed) and its sub-fields
/// override the top-level ones. Any failure keeps the original record; this
/// is enrichment, never an error surfaced to the user.
pub(crate) fn enrich_from_reasoning(raw: RawVerdict) -> RawVerdict {
    let Some(reasoning) = raw.reasoning.as_deref() else {
        return raw;
    };
    if !reasoning.contains(RESULT_MARKER) && !reasoning.contains(ESCAPED_RESULT_MARKER) {
        return raw;
    }
    let Some(block) = extract_json_block(reasoning) else {
        tracing::debug!("embedded verdict marker without a brace pair");
        return raw;
    };
    let embedded = match serde_json::from_str::<EmbeddedVerdict>(block) {
        Ok(embedded) => embedded,
        Err(_) => match serde_json::from_str::<EmbeddedVerdict>(&unescape_once(block)) {
            Ok(embedded) => embedded,
            Err(err) => {
                tracing::debug!(error = %err, "embedded verdict decode failed");
                return raw;
            }
        },
    };
    tracing::debug!("recovered embedded verdict from reasoning");
    apply_embedded(raw, embedded)
}

fn apply_embedded(mut raw: RawVerdict, embedded: EmbeddedVerdict) -> RawVerdict {
    if let Some(result) = non_blank(embedded.result) {
        raw.verification_status = Some(result);
    }
    if let Some(confidence) = embedded.confidence {
        raw.confidence = Some(confidence);
    }
    if let Some(summary) = non_blank(embedded.summary) {
        raw.summary = Some(summary);
    }
    if let Some(reasoning) = non_blank(embedded.reasoning) {
        raw.reasoning = Some(reasoning);
    }
    if let Some(context) = non_blank(embedded.context) {
        raw.context = Some(context);
    }
    if let Some(consistency) = non_blank(embedded.consistency) {
        raw.consistency = Some(consistency);
    }
    if let Some(recommendations) = non_blank(embedded.recommendations) {
        raw.recommendations = Some(recommendations);
    }
    raw
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn extract_json_block(input: &str) -> Option<&str> {
    let start = input.find('{')?;
    let end = input.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&input[start..=end])
}

/// Undoes one level of string escaping (`\"`, `\\`, `\n`, `\t`).
fn unescape_once(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_reasoning(reasoning: &str) -> RawVerdict {
        RawVerdict {
            verification_status: Some("Not Verified".to_string()),
            confidence: Some(0.5),
            reasoning: Some(reasoning.to_string()),
            ..RawVerdict::default()
        }
    }

    #[test]
    fn plain_reasoning_is_left_alone() {
        let raw = raw_with_reasoning("The claim matches the official bulletin.");
        let enriched = enrich_from_reasoning(raw.clone());
        assert_eq!(enriched, raw);
    }

    #[test]
    fn embedded_result_overrides_status() {
        let reasoning = r#"Model answer: {"result": "Falso", "confidence": 0.91, "summary": "Fabricated tally"} (end)"#;
        let enriched = enrich_from_reasoning(raw_with_reasoning(reasoning));
        assert_eq!(enriched.verification_status.as_deref(), Some("Falso"));
        assert_eq!(enriched.confidence, Some(0.91));
        assert_eq!(enriched.summary.as_deref(), Some("Fabricated tally"));
    }

    #[test]
    fn escaped_embedded_object_is_recovered() {
        let reasoning =
            "wrapped: {\\\"result\\\": \\\"Verificado\\\", \\\"confidence\\\": 0.88}";
        let enriched = enrich_from_reasoning(raw_with_reasoning(reasoning));
        assert_eq!(enriched.verification_status.as_deref(), Some("Verificado"));
        assert_eq!(enriched.confidence, Some(0.88));
    }

    #[test]
    fn undecodable_block_keeps_original_silently() {
        let reasoning = r#"the "result" is {not json at all}"#;
        let raw = raw_with_reasoning(reasoning);
        let enriched = enrich_from_reasoning(raw.clone());
        assert_eq!(enriched, raw);
    }

    #[test]
    fn marker_without_braces_keeps_original() {
        let reasoning = r#"we could not compute a "result" here"#;
        let raw = raw_with_reasoning(reasoning);
        let enriched = enrich_from_reasoning(raw.clone());
        assert_eq!(enriched, raw);
    }

    #[test]
    fn blank_embedded_fields_do_not_override() {
        let reasoning = r#"{"result": "  ", "summary": "Checked against the registry"}"#;
        let enriched = enrich_from_reasoning(raw_with_reasoning(reasoning));
        assert_eq!(
            enriched.verification_status.as_deref(),
            Some("Not Verified")
        );
        assert_eq!(
            enriched.summary.as_deref(),
            Some("Checked against the registry")
        );
    }
}
