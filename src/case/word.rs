use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first grapheme of a word and lowercase the rest.
///
/// Empty words map to the empty string, so degenerate input never panics.
pub fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + &graphemes.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("h"), "H");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_passes_non_alphabetic_through() {
        assert_eq!(capitalize("123!"), "123!");
        assert_eq!(capitalize("hello_world-test"), "Hello_world-test");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
