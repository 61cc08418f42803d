use std::time::{Duration, UNIX_EPOCH};

use analysis::links::derive_links;
use analysis::recommend::split_recommendations;
use analysis::status::{confidence_percent, confidence_tier, status_config};
use analysis::AnalysisResult;
use ratatui::text::{Line, Span, Text};

use super::text::{display_width, sanitize_text, wrap_text_lines};
use super::theme::{Theme, ValueStyle};

const METER_WIDTH: usize = 24;

/// Renders the whole verdict as styled lines: badge, confidence meter,
/// analysis cards, recommendations, reference links, sources, metadata.
pub(crate) fn format_verdict_text(
    theme: &Theme,
    result: &AnalysisResult,
    width: u16,
) -> Text<'static> {
    let width = (width.max(1) as usize).max(8);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let badge = status_config(&result.verification_status);
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {}", badge.icon, badge.english_label),
            theme.tier_style(badge.tier),
        ),
        Span::styled(
            format!("  ({})", sanitize_text(&result.verification_status)),
            theme.key_style(),
        ),
    ]));
    for segment in wrap_text_lines(badge.description, width) {
        lines.push(Line::styled(segment, theme.value_style(ValueStyle::Dim)));
    }
    lines.push(Line::default());

    let tier = confidence_tier(result.confidence);
    lines.push(Line::from(vec![
        Span::styled("Confidence  ", theme.key_style()),
        Span::styled(
            confidence_meter(result.confidence, METER_WIDTH),
            theme.confidence_style(tier),
        ),
        Span::styled(
            format!(
                "  {} ({}%)",
                tier.label(),
                confidence_percent(result.confidence)
            ),
            theme.confidence_style(tier),
        ),
    ]));
    lines.push(Line::default());

    push_section(&mut lines, theme, "Summary", &result.summary, width);
    push_section(
        &mut lines,
        theme,
        "Evidence and Reasoning",
        &result.reasoning,
        width,
    );
    push_section(&mut lines, theme, "Context", &result.context, width);
    push_section(
        &mut lines,
        theme,
        "Consistency",
        &result.consistency,
        width,
    );

    lines.push(Line::styled(
        "Recommendations".to_string(),
        theme.accent_style(),
    ));
    for (index, item) in split_recommendations(&result.recommendations)
        .iter()
        .enumerate()
    {
        push_numbered_item(&mut lines, theme, index + 1, item, width);
    }
    lines.push(Line::default());

    lines.push(Line::styled(
        "Reference Links".to_string(),
        theme.accent_style(),
    ));
    for link in derive_links(&result.sources) {
        lines.push(Line::from(vec![
            Span::styled(link.title, theme.value_style(ValueStyle::Important)),
            Span::styled(format!("  {}", link.description), theme.key_style()),
        ]));
        lines.push(Line::styled(
            format!("  {}", link.url),
            theme.value_style(ValueStyle::Dim),
        ));
    }
    lines.push(Line::default());

    lines.push(Line::styled(
        "Sources Consulted".to_string(),
        theme.accent_style(),
    ));
    for source in &result.sources {
        for (index, segment) in wrap_text_lines(&sanitize_text(source), width.saturating_sub(2))
            .into_iter()
            .enumerate()
        {
            let prefix = if index == 0 { "- " } else { "  " };
            lines.push(Line::styled(
                format!("{prefix}{segment}"),
                theme.value_style(ValueStyle::Normal),
            ));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("Analyzed: ", theme.key_style()),
        Span::styled(
            format_analysis_time(result.timestamp),
            theme.value_style(ValueStyle::Normal),
        ),
        Span::styled("  Language: ", theme.key_style()),
        Span::styled(
            sanitize_text(&result.detected_language),
            theme.value_style(ValueStyle::Normal),
        ),
        Span::styled("  Reliable: ", theme.key_style()),
        Span::styled(
            if result.is_reliable { "yes" } else { "no" }.to_string(),
            theme.value_style(ValueStyle::Normal),
        ),
    ]));

    Text::from(lines)
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    title: &str,
    body: &str,
    width: usize,
) {
    lines.push(Line::styled(title.to_string(), theme.accent_style()));
    for segment in wrap_text_lines(&sanitize_text(body), width) {
        lines.push(Line::styled(segment, theme.value_style(ValueStyle::Normal)));
    }
    lines.push(Line::default());
}

fn push_numbered_item(
    lines: &mut Vec<Line<'static>>,
    theme: &Theme,
    number: usize,
    item: &str,
    width: usize,
) {
    let label = format!("{number}. ");
    let indent = " ".repeat(display_width(&label));
    let body_width = width.saturating_sub(display_width(&label)).max(1);
    for (index, segment) in wrap_text_lines(&sanitize_text(item), body_width)
        .into_iter()
        .enumerate()
    {
        let prefix = if index == 0 {
            label.clone()
        } else {
            indent.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, theme.key_style()),
            Span::styled(segment, theme.value_style(ValueStyle::Normal)),
        ]));
    }
}

/// Text meter for the confidence value, e.g. `████████████░░░░`.
pub(crate) fn confidence_meter(confidence: f64, width: usize) -> String {
    let width = width.max(1);
    let filled = ((confidence.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut bar = String::new();
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(width - filled));
    bar
}

pub(crate) fn format_analysis_time(timestamp_ns: u64) -> String {
    let time = UNIX_EPOCH + Duration::from_nanos(timestamp_ns);
    humantime::format_rfc3339_seconds(time).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::normalize::normalize_verdict;
    use protocol::RawVerdict;

    fn rendered(result: &AnalysisResult) -> String {
        let theme = Theme::dark();
        let text = format_verdict_text(&theme, result, 60);
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn meter_is_proportional() {
        assert_eq!(confidence_meter(0.0, 4), "░░░░");
        assert_eq!(confidence_meter(0.5, 4), "██░░");
        assert_eq!(confidence_meter(1.0, 4), "████");
    }

    #[test]
    fn analysis_time_renders_rfc3339() {
        assert_eq!(
            format_analysis_time(1_700_000_000_000_000_000),
            "2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn verdict_text_shows_badge_and_sections() {
        let result = normalize_verdict(RawVerdict {
            verification_status: Some("Falso".to_string()),
            confidence: Some(0.85),
            ..RawVerdict::default()
        });
        let text = rendered(&result);
        assert!(text.contains("FALSE"));
        assert!(text.contains("High (85%)"));
        assert!(text.contains("Recommendations"));
        assert!(text.contains("Reference Links"));
        assert!(text.contains("Sources Consulted"));
    }
}
