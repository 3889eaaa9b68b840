// Character-class helpers shared by the finder and the highlighter.

/// Split on runs of Unicode `White_Space`, dropping empty pieces.
pub fn split_terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(char::is_whitespace).filter(|t| !t.is_empty())
}

/// Byte offset of every character of `text`, followed by `text.len()`.
///
/// `bounds[i]..bounds[j]` is the byte span of characters `i..j`.
pub fn char_bounds(text: &str) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(text.len() + 1);
    bounds.extend(text.char_indices().map(|(i, _)| i));
    bounds.push(text.len());
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        let terms: Vec<_> = split_terms("  boulanger \t pâtissier\n").collect();
        assert_eq!(terms, ["boulanger", "pâtissier"]);
    }

    #[test]
    fn splits_on_unicode_spaces() {
        let terms: Vec<_> = split_terms("aide\u{00A0}soignant\u{3000}x").collect();
        assert_eq!(terms, ["aide", "soignant", "x"]);
    }

    #[test]
    fn blank_has_no_terms() {
        assert_eq!(split_terms("").count(), 0);
        assert_eq!(split_terms(" \t\u{2003} ").count(), 0);
    }

    #[test]
    fn splits_on_vertical_tab_and_line_separators() {
        let terms: Vec<_> = split_terms("a\x0Bb\u{2028}c\u{0085}d").collect();
        assert_eq!(terms, ["a", "b", "c", "d"]);
    }

    #[test]
    fn bounds_cover_multibyte() {
        assert_eq!(char_bounds("aé€"), [0, 1, 3, 6]);
        assert_eq!(char_bounds(""), [0]);
    }
}
