//! Password hashing for fixed-user credentials.
//!
//! ClearML expects `pass_hashed` passwords as base64 of the bcrypt hash
//! string, so that is the encoding produced and verified here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::error::{HashError, Result};

/// bcrypt work factor.
pub const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash `plain` with a fresh salt and encode it for `apiserver.conf`.
pub fn hash_password(plain: &str) -> Result<String> {
    hash_password_with_cost(plain, BCRYPT_COST)
}

/// [`hash_password`] with an explicit bcrypt cost.
pub fn hash_password_with_cost(plain: &str, cost: u32) -> Result<String> {
    let hashed = bcrypt::hash(plain, cost).map_err(HashError::from)?;
    Ok(STANDARD.encode(hashed.as_bytes()))
}

/// Check `plain` against a value produced by [`hash_password`].
pub fn verify_password(plain: &str, encoded: &str) -> Result<bool> {
    let decoded = Zeroizing::new(STANDARD.decode(encoded).map_err(HashError::from)?);
    let hashed = Zeroizing::new(String::from_utf8(decoded.to_vec()).map_err(HashError::from)?);
    let matches = bcrypt::verify(plain, &hashed).map_err(HashError::from)?;
    Ok(matches)
}
