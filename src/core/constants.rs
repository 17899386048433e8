//! Constants used throughout confgen.
//!
//! Centralizes placeholder names, token sizes and the fixed parts of the
//! generated ClearML configuration.

/// Placeholder replaced with a URL-safe secret (`<secret>`).
pub const SECRET_PLACEHOLDER: &str = "secret";

/// Placeholder replaced with an uppercase client id (`<key>`).
pub const KEY_PLACEHOLDER: &str = "key";

/// Random bytes drawn for each `<secret>` token.
pub const DEFAULT_SECRET_LENGTH: usize = 50;

/// Characters in each `<key>` client id.
pub const DEFAULT_CLIENT_ID_LENGTH: usize = 30;

/// Tokens drawn before giving up on an alphanumeric first character.
pub const SECRET_MAX_ATTEMPTS: usize = 10;

/// Alphabet for client ids.
pub const CLIENT_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Prefix joined with the operator's domain to form the cookie domain.
pub const COOKIE_DOMAIN_PREFIX: &str = ".clearml.";

/// Cookie lifetime written into the `auth.cookies` block.
pub const COOKIE_MAX_AGE: u64 = 99_999_999_999;

/// Content type sent with uploaded objects.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// S3 object key size limit in bytes.
pub const MAX_OBJECT_KEY_LEN: usize = 1024;
