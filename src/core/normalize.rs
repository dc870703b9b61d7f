// src/core/normalize.rs

/// Turns a raw passage into trie-ready tokens.
///
/// ASCII punctuation is dropped (joining the pieces it separated, so
/// `"punc#tion"` becomes `"punction"`), letters are lower-cased and the
/// result is split on whitespace. Digits survive untouched.
/// Every token returned is non-empty.
pub fn preprocess(passage: &str) -> Vec<String> {
    let cleaned: String = passage
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalizes a query fragment down to the single token being completed.
/// Returns `None` when nothing is left after normalization.
pub fn fragment_token(fragment: &str) -> Option<String> {
    preprocess(fragment).pop()
}
