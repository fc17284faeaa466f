use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // words (with inner apostrophes), numbers (with inner separators), then any single
    // remaining non-space character as a punctuation token
    static ref WORD_RE: Regex = Regex::new(
        r"(?u)\p{L}[\p{L}\p{M}\p{N}_]*(?:['\x{2019}]\p{L}+)*|\p{N}+(?:[.,]\p{N}+)*|[^\s\p{L}\p{N}]"
    ).expect("valid regex");
}

/// Split text into word and punctuation tokens, preserving case.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_punctuation_and_keeps_case() {
        let t = word_tokenize("Hello, World! It's 3.5 degrees.");
        assert_eq!(t, vec!["Hello", ",", "World", "!", "It's", "3.5", "degrees", "."]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(word_tokenize("   \n\t").is_empty());
    }
}
