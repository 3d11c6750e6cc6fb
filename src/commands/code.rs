//! Shareable code conversion

use crate::core::{Word, normalize_guess};
use crate::wordlists::WordStore;
use anyhow::{Result, anyhow};

/// Code for a secret word
///
/// # Errors
///
/// Returns an error if the word is not a secret or has no code.
pub fn encode_secret(store: &WordStore, secret: &str) -> Result<String> {
    let secret = normalize_guess(secret, store.word_len());
    store
        .encode_secret_as_code(&secret)
        .ok_or_else(|| anyhow!("'{secret}' has no shareable code"))
}

/// Secret behind a code
///
/// # Errors
///
/// Returns an error if the code does not map to a secret.
pub fn decode_code<'a>(store: &'a WordStore, code: &str) -> Result<&'a Word> {
    store
        .decode_code_as_secret(code)
        .ok_or_else(|| anyhow!("'{}' is not a valid code", code.trim()))
}
