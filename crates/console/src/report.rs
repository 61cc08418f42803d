use analysis::links::derive_links;
use analysis::recommend::split_recommendations;
use analysis::status::{confidence_percent, confidence_tier, status_config};
use analysis::AnalysisResult;

use crate::ui::format_analysis_time;

/// Plain-text verdict report for the one-shot `--text` mode.
pub(crate) fn render_report(result: &AnalysisResult) -> String {
    let badge = status_config(&result.verification_status);
    let tier = confidence_tier(result.confidence);
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} ({})\n",
        badge.icon, badge.english_label, result.verification_status
    ));
    out.push_str(&format!("{}\n\n", badge.description));
    out.push_str(&format!(
        "Confidence: {} ({}%)\n\n",
        tier.label(),
        confidence_percent(result.confidence)
    ));

    out.push_str(&format!("Summary: {}\n", result.summary));
    out.push_str(&format!("Evidence and Reasoning: {}\n", result.reasoning));
    out.push_str(&format!("Context: {}\n", result.context));
    out.push_str(&format!("Consistency: {}\n\n", result.consistency));

    out.push_str("Recommendations:\n");
    for (index, item) in split_recommendations(&result.recommendations)
        .iter()
        .enumerate()
    {
        out.push_str(&format!("  {}. {}\n", index + 1, item));
    }
    out.push('\n');

    out.push_str("Reference links:\n");
    for link in derive_links(&result.sources) {
        out.push_str(&format!("  {} - {}\n    {}\n", link.title, link.description, link.url));
    }
    out.push('\n');

    out.push_str("Sources consulted:\n");
    for source in &result.sources {
        out.push_str(&format!("  - {source}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Analyzed: {}  Language: {}  Reliable: {}\n",
        format_analysis_time(result.timestamp),
        result.detected_language,
        if result.is_reliable { "yes" } else { "no" }
    ));
    out
}
