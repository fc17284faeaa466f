use corpus::normalize::{Normalizer, StopwordNormalizer};
use corpus::tokenizer::word_tokenize;

#[test]
fn it_keeps_case_and_punctuation() {
    let toks = word_tokenize("Running Runners RUN! The café's menu.");
    assert_eq!(toks, vec!["Running", "Runners", "RUN", "!", "The", "café's", "menu", "."]);
}

#[test]
fn it_normalizes_and_stems() {
    let words: Vec<String> = word_tokenize("Running Runners RUN! The café's menu.")
        .into_iter()
        .map(|t| StopwordNormalizer.normalize(t, true))
        .filter(|w| !w.is_empty())
        .collect();
    assert!(words.contains(&"run".to_string()));
    assert!(words.contains(&"menu".to_string()));
    assert!(!words.iter().any(|w| w == "the" || w == "!"));
}
