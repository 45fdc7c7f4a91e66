// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::MAX_SLUG_LEN;
use regex::Regex;

/// Whitespace as web clients see it: ASCII blanks, the Unicode space
/// separators and U+FEFF, but not U+0085.
const WHITESPACE_CLASS: &str = concat!(
    r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'..='\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Lowercases, strips everything except word characters, whitespace and
/// hyphens, trims, joins whitespace runs with `-` and caps the length.
#[derive(Clone)]
pub struct RegexSlugGenerator {
    disallowed: Regex,
    whitespace: Regex,
}

impl Default for RegexSlugGenerator {
    fn default() -> Self {
        Self {
            disallowed: Regex::new(&format!("[^a-z0-9_{WHITESPACE_CLASS}-]"))
                .expect("static slug pattern"),
            whitespace: Regex::new(&format!("[{WHITESPACE_CLASS}]+"))
                .expect("static whitespace pattern"),
        }
    }
}

impl SlugGenerator for RegexSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let stripped = self.disallowed.replace_all(&lowered, "");
        let hyphenated = self
            .whitespace
            .replace_all(stripped.trim_matches(is_whitespace), "-");
        hyphenated.chars().take(MAX_SLUG_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugify(input: &str) -> String {
        RegexSlugGenerator::default().slugify(input)
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn keeps_underscores_digits_and_hyphens() {
        assert_eq!(slugify("Rust_2024 -- edition"), "rust_2024----edition");
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(slugify("a\u{FEFF}b"), "a-b");
        assert_eq!(slugify("\u{FEFF}title\u{FEFF}"), "title");
        assert_eq!(slugify("no\u{00A0}break"), "no-break");
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(slugify("a\u{0085}b"), "ab");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn caps_length() {
        let slug = slugify(&"word ".repeat(100));
        assert_eq!(slug.chars().count(), MAX_SLUG_LEN);
    }

    #[test]
    fn is_idempotent() {
        let long = "x y ".repeat(80);
        for input in ["Hello, World!", "  multiple   spaces  ", "A_b-C d", long.as_str()] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }
}
