use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // word characters are ASCII only: anything else is stripped from a token
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_\s]").expect("valid regex");
}

/// Lazily split document text into raw whitespace-delimited tokens.
pub fn raw_tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}

/// Strip non-word characters from a raw token and lowercase it.
///
/// With `fold_diacritics` the token is NFKD-decomposed first so accented
/// letters keep their base letter ("café" becomes "cafe" rather than "caf").
pub fn normalize(token: &str, fold_diacritics: bool) -> String {
    let token: Cow<'_, str> = if fold_diacritics {
        Cow::Owned(token.nfkd().collect())
    } else {
        Cow::Borrowed(token)
    };
    NON_WORD.replace_all(&token, "").to_lowercase()
}
