use termstat_core::tokenizer::{normalize, raw_tokens};

#[test]
fn it_strips_punctuation_and_lowercases() {
    let words: Vec<String> = raw_tokens("Running, RUNNERS' run! (the) well-known").map(|t| normalize(t, false)).collect();
    assert_eq!(words, vec!["running", "runners", "run", "the", "wellknown"]);
}

#[test]
fn it_keeps_digits_and_underscores() {
    assert_eq!(normalize("Route_66!", false), "route_66");
}

#[test]
fn it_drops_non_ascii_letters_unless_folded() {
    assert_eq!(normalize("Café's", false), "cafs");
    assert_eq!(normalize("Café's", true), "cafes");
}

#[test]
fn punctuation_only_tokens_become_empty() {
    let words: Vec<String> = raw_tokens("-- ... ?!").map(|t| normalize(t, false)).collect();
    assert!(words.iter().all(|w| w.is_empty()));
    assert_eq!(words.len(), 3);
}
