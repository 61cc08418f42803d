/// Word-aware wrapping for prose panels. Words longer than the width are
/// broken into width-sized pieces.
pub(super) fn wrap_text_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            let mut chunk = word.to_string();
            while chunk.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(chunk.chars().take(width).collect());
                chunk = chunk.chars().skip(width).collect();
            }
            if chunk.is_empty() {
                continue;
            }
            if current.is_empty() {
                current = chunk;
            } else if current.chars().count() + 1 + chunk.chars().count() <= width {
                current.push(' ');
                current.push_str(&chunk);
            } else {
                lines.push(std::mem::take(&mut current));
                current = chunk;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

const TAB_WIDTH: usize = 4;

/// Remote text can carry control characters the terminal must not see.
pub(super) fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.replace("\r\n", "\n").chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            '\r' => out.push('\n'),
            ch if ch.is_control() => out.push(' '),
            ch => out.push(ch),
        }
    }
    out
}

pub(super) fn display_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_keeps_words_whole() {
        let lines = wrap_text_lines("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn overlong_words_are_broken() {
        let lines = wrap_text_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn blank_lines_survive() {
        let lines = wrap_text_lines("one\n\ntwo", 10);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn sanitize_replaces_control_characters() {
        assert_eq!(sanitize_text("a\u{7}b"), "a b");
        assert_eq!(sanitize_text("a\r\nb"), "a\nb");
        assert_eq!(sanitize_text("a\tb"), "a    b");
    }
}
