//! Token command - print a single generated token.

use zeroize::Zeroizing;

use crate::core::token;
use crate::error::Result;

/// Print a URL-safe secret drawn from `length` random bytes.
pub fn secret(length: usize) -> Result<()> {
    let value = Zeroizing::new(token::generate_secret(length));
    println!("{}", value.as_str());
    Ok(())
}

/// Print an uppercase alphanumeric client id.
pub fn client_id(length: usize) -> Result<()> {
    let value = Zeroizing::new(token::generate_client_id(length));
    println!("{}", value.as_str());
    Ok(())
}
