//! Term normalization used when selecting the vocabulary.
//!
//! Normalization is a collaborator: anything implementing [`Normalizer`] can be handed
//! to the selector, including plain closures. [`StopwordNormalizer`] is the stock
//! English implementation.

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Maps a raw term to its cleaned form. An empty result discards the term.
pub trait Normalizer {
    fn normalize(&self, term: &str, stem: bool) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str, bool) -> String,
{
    fn normalize(&self, term: &str, stem: bool) -> String {
        self(term, stem)
    }
}

lazy_static! {
    static ref WORD: Regex = Regex::new(r"^(?u)\p{L}[\p{L}\p{M}\p{N}_'\x{2019}]*$").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// NFKC + lowercase, drops punctuation, numbers and English stop words, and
/// optionally applies the Snowball English stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordNormalizer;

impl Normalizer for StopwordNormalizer {
    fn normalize(&self, term: &str, stem: bool) -> String {
        let lowered = term.nfkc().collect::<String>().to_lowercase().replace('\u{2019}', "'");
        if !WORD.is_match(&lowered) || is_stopword(&lowered) {
            return String::new();
        }
        if stem {
            STEMMER.stem(&lowered).into_owned()
        } else {
            lowered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_stopwords() {
        let n = StopwordNormalizer;
        assert_eq!(n.normalize("Senate", false), "senate");
        assert_eq!(n.normalize("The", false), "");
        assert_eq!(n.normalize("Don\u{2019}t", false), "");
    }

    #[test]
    fn drops_punctuation_and_numbers() {
        let n = StopwordNormalizer;
        assert_eq!(n.normalize(",", false), "");
        assert_eq!(n.normalize("1999", false), "");
    }

    #[test]
    fn stems_only_when_asked() {
        let n = StopwordNormalizer;
        assert_eq!(n.normalize("Running", true), "run");
        assert_eq!(n.normalize("Running", false), "running");
    }

    #[test]
    fn closures_are_normalizers() {
        let upper = |t: &str, _stem: bool| t.to_uppercase();
        assert_eq!(upper.normalize("abc", false), "ABC");
    }
}
