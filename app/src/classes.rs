//! Class-name composition.

/// Merge optional class-name fragments into a single `class` attribute value.
///
/// Absent fragments are skipped. Each fragment may itself hold several
/// whitespace-separated classes; duplicates keep their first position.
///
/// ```
/// use book_ui::class_names;
///
/// let class = class_names([Some("book-header"), None, Some("bookHeader_bk book-header")]);
/// assert_eq!(class, "book-header bookHeader_bk");
/// ```
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<&'a str> = Vec::new();

    for token in parts.into_iter().flatten().flat_map(str::split_whitespace) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }

    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_in_order() {
        assert_eq!(
            class_names([Some("book-main"), Some("bookMain_bk")]),
            "book-main bookMain_bk"
        );
    }

    #[test]
    fn test_skips_absent_and_blank_fragments() {
        assert_eq!(
            class_names([None, Some(""), Some("book-footer"), Some("   "), None]),
            "book-footer"
        );
    }

    #[test]
    fn test_deduplicates_keeping_first_position() {
        assert_eq!(
            class_names([Some("a b"), Some("c a"), Some("b d")]),
            "a b c d"
        );
    }

    #[test]
    fn test_normalizes_whitespace() {
        assert_eq!(class_names([Some("  a\tb \n c ")]), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(class_names(std::iter::empty::<Option<&str>>()), "");
        assert_eq!(class_names([None, None]), "");
    }
}
