//! Free-text normalization for titles and participant names.

/// Canonicalizes a text field for export.
///
/// Trims surrounding whitespace, drops every `\r`, and turns each `\n` and
/// each `\t` into a single space. Runs are not collapsed: `"a\n\nb"` becomes
/// `"a  b"`.
///
/// ```
/// use groupmeta::normalize::normalize;
///
/// assert_eq!(normalize("  a\nb\t c \r"), "a b  c");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pinned_example() {
        assert_eq!(normalize("  a\nb\t c \r"), "a b  c");
    }

    #[test]
    fn test_normalize_does_not_collapse() {
        assert_eq!(normalize("a\n\nb"), "a  b");
        assert_eq!(normalize("a\t\tb"), "a  b");
        assert_eq!(normalize("a\r\nb"), "a b");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize(" Família 🎉\tGrupo "), "Família 🎉 Grupo");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["  a\nb\t c \r", "x\r\r\ty", "\n\n", "plain"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
