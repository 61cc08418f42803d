pub const ENGLISH: &str = "English";
pub const SPANISH: &str = "Spanish";

const ENGLISH_KEYWORDS: [&str; 13] = [
    "the",
    "and",
    "for",
    "are",
    "with",
    "his",
    "they",
    "this",
    "have",
    "from",
    "government",
    "president",
    "election",
];

const SPANISH_KEYWORDS: [&str; 15] = [
    "el",
    "la",
    "los",
    "las",
    "de",
    "del",
    "en",
    "con",
    "por",
    "para",
    "que",
    "es",
    "gobierno",
    "presidente",
    "elecciones",
];

/// Annotates which language the input text is mostly written in, by counting
/// which fixed keywords appear in the lowercased text. Strictly more English
/// hits wins; ties go to Spanish. Display-only, never alters the request.
pub fn detect_language(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    let english_hits = ENGLISH_KEYWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    let spanish_hits = SPANISH_KEYWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    if english_hits > spanish_hits {
        ENGLISH
    } else {
        SPANISH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_text_is_detected() {
        let text = "The government said they have counted the votes from this election";
        assert_eq!(detect_language(text), ENGLISH);
    }

    #[test]
    fn spanish_text_is_detected() {
        let text = "El gobierno dijo que los votos de las elecciones ya fueron contados";
        assert_eq!(detect_language(text), SPANISH);
    }

    #[test]
    fn ties_favor_spanish() {
        assert_eq!(detect_language(""), SPANISH);
        assert_eq!(detect_language("12345"), SPANISH);
    }
}
