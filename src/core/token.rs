//! Random token generation.
//!
//! Secrets and client ids are drawn from the operating system CSPRNG. The
//! `_with` variants accept any cryptographic RNG so the retry policy can be
//! exercised deterministically.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;

use crate::core::constants::{CLIENT_ID_ALPHABET, SECRET_MAX_ATTEMPTS};

/// Generate a URL-safe secret from `length` random bytes.
///
/// The result is unpadded base64url, so it is at least `length` characters
/// long and drawn from `[A-Za-z0-9_-]`. Tokens starting with `-` or `_`
/// are redrawn, up to [`SECRET_MAX_ATTEMPTS`] draws in total. When every
/// draw starts with punctuation the last one is returned as is.
pub fn generate_secret(length: usize) -> String {
    generate_secret_with(&mut OsRng, length)
}

/// [`generate_secret`] with an explicit RNG.
pub fn generate_secret_with<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> String {
    let mut bytes = vec![0u8; length];
    let mut token = String::new();

    for attempt in 1..=SECRET_MAX_ATTEMPTS {
        rng.fill_bytes(&mut bytes);
        token = URL_SAFE_NO_PAD.encode(&bytes);
        if !starts_with_punctuation(&token) {
            return token;
        }
        debug!(attempt, "secret starts with punctuation, redrawing");
    }

    debug!(
        attempts = SECRET_MAX_ATTEMPTS,
        "retry budget exhausted, keeping last secret"
    );
    token
}

/// Generate a client id of exactly `length` characters from `A-Z0-9`.
pub fn generate_client_id(length: usize) -> String {
    generate_client_id_with(&mut OsRng, length)
}

/// [`generate_client_id`] with an explicit RNG.
pub fn generate_client_id_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    length: usize,
) -> String {
    (0..length)
        .map(|_| CLIENT_ID_ALPHABET[rng.gen_range(0..CLIENT_ID_ALPHABET.len())] as char)
        .collect()
}

fn starts_with_punctuation(token: &str) -> bool {
    token.starts_with('-') || token.starts_with('_')
}
