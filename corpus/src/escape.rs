//! Repair of curly quotes that were escaped like ASCII quotes.
//!
//! Some upstream exports wrote `\“` and `\”` into `body_text`. A backslash followed by
//! a multi-byte character is not a JSON escape, so those lines would fail to parse.
//! Both sequences are rewritten to `\"`. Nothing before the `body_text` key is touched,
//! and a line without the key passes through as is.

use std::borrow::Cow;

const BODY_KEY: &str = "\"body_text\"";
const MIS_ESCAPED_QUOTES: [&str; 2] = ["\\\u{201C}", "\\\u{201D}"];
const ESCAPED_QUOTE: &str = "\\\"";

/// Rewrite mis-escaped curly quotes after the `body_text` key. Idempotent.
pub fn repair_escapes(line: &str) -> Cow<'_, str> {
    let Some(spot) = line.find(BODY_KEY) else {
        return Cow::Borrowed(line);
    };
    let split = spot + BODY_KEY.len();
    let (head, tail) = line.split_at(split);
    if !MIS_ESCAPED_QUOTES.iter().any(|pat| tail.contains(pat)) {
        return Cow::Borrowed(line);
    }

    let mut repaired = tail.to_string();
    for pat in MIS_ESCAPED_QUOTES {
        repaired = repaired.replace(pat, ESCAPED_QUOTE);
    }
    Cow::Owned(format!("{head}{repaired}"))
}
