use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Derives a URL-safe slug from a tag title.
///
/// The title is decomposed (NFD), stripped of combining diacritical marks and
/// lowercased. Anything that is not an ASCII word character or a separator is
/// dropped, and every run of separators becomes a single `-`. Runs at either
/// end of the title produce no hyphen.
///
/// ```
/// use tag_form::slug::slug_from_title;
///
/// assert_eq!(slug_from_title("Café Olé"), "cafe-ole");
/// ```
pub fn slug_from_title(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    let folded = input
        .nfd()
        .filter(|ch| !COMBINING_MARKS.contains(ch))
        .flat_map(char::to_lowercase);

    for ch in folded {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_separator = false;
        } else if is_separator(ch) {
            pending_separator = true;
        }
        // Anything else is dropped without ending the current separator run.
    }

    slug
}

/// Returns `true` when `value` could have been produced by [`slug_from_title`].
pub fn is_valid_slug(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
}

// Matches the browser `\s` class. A hyphen already in the title counts as a
// separator too so that slugs map onto themselves.
fn is_separator(ch: char) -> bool {
    match ch {
        '-' | '\u{feff}' => true,
        '\u{0085}' => false,
        _ => ch.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slug_from_title(""), "");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(slug_from_title("Café Olé"), "cafe-ole");
        assert_eq!(slug_from_title("Programação Funcional"), "programacao-funcional");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slug_from_title("  Multiple   Spaces "), "multiple-spaces");
        assert_eq!(slug_from_title("tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(slug_from_title("no\u{a0}break"), "no-break");
    }

    #[test]
    fn drops_punctuation_inside_separator_runs() {
        assert_eq!(slug_from_title("Rust & Go!"), "rust-go");
        assert_eq!(slug_from_title("Node.js"), "nodejs");
        assert_eq!(slug_from_title("C++ / C#"), "c-c");
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(slug_from_title("Web_3 2024"), "web_3-2024");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slug_from_title("Straße"), "strae");
        assert_eq!(slug_from_title("日本語"), "");
        assert_eq!(slug_from_title("İstanbul"), "istanbul");
    }

    #[test]
    fn output_is_a_valid_slug() {
        let titles = [
            "React",
            "  Leading and trailing  ",
            "ÀÉÎÕÜ çñ",
            "--already--hyphenated--",
            "\u{feff}zero width\u{3000}ideographic",
            "emoji 🎉 party",
        ];

        for title in titles {
            let slug = slug_from_title(title);
            assert!(is_valid_slug(&slug), "{title:?} produced {slug:?}");
            assert!(!slug.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        for title in ["Café Olé", "cafe-ole", "  a - b  ", "React Native"] {
            let once = slug_from_title(title);
            assert_eq!(slug_from_title(&once), once);
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(is_valid_slug(""));
        assert!(is_valid_slug("react-native"));
        assert!(!is_valid_slug("React"));
        assert!(!is_valid_slug("-react"));
        assert!(!is_valid_slug("react--native"));
        assert!(!is_valid_slug("react native"));
    }
}
