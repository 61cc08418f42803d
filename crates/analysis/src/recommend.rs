use std::sync::OnceLock;

use regex::Regex;

/// Fallback list shown when the verdict carries no usable recommendations.
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Verify information with official sources",
    "Consult multiple sources before sharing",
    "Cross-check with recognized electoral bodies",
];

fn numbered_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\d+\.").expect("numbered marker pattern"))
}

/// Splits the free-text recommendations field into discrete items. Priority:
/// numbered-list markers, then line breaks, then sentence periods, else the
/// whole string. Always yields at least one item; blank input falls back to
/// the fixed default list. Purely cosmetic list-building.
pub fn split_recommendations(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return FALLBACK_RECOMMENDATIONS
            .iter()
            .map(|item| item.to_string())
            .collect();
    }

    if numbered_marker().is_match(trimmed) {
        let items = collect_items(numbered_marker().split(trimmed));
        if !items.is_empty() {
            return items;
        }
    }

    if trimmed.contains('\n') {
        let items = collect_items(trimmed.split('\n'));
        if !items.is_empty() {
            return items;
        }
    }

    let sentences = collect_items(trimmed.split('.'));
    if sentences.len() > 1 {
        return sentences
            .into_iter()
            .map(|sentence| format!("{sentence}."))
            .collect();
    }

    vec![trimmed.to_string()]
}

fn collect_items<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
