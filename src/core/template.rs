//! Placeholder substitution for `secure.conf` templates.

use tracing::debug;

use crate::core::constants::{
    DEFAULT_CLIENT_ID_LENGTH, DEFAULT_SECRET_LENGTH, KEY_PLACEHOLDER, SECRET_PLACEHOLDER,
};
use crate::core::token;

/// Replace every `<placeholder_name>` in `content` with a fresh value.
///
/// Occurrences are replaced left to right, one `generator` call each.
/// Replacement values are not scanned again, so a generated value that
/// happens to contain a placeholder is left alone.
pub fn substitute<F>(content: &str, placeholder_name: &str, mut generator: F) -> String
where
    F: FnMut() -> String,
{
    let placeholder = format!("<{}>", placeholder_name);
    let mut fragments = content.split(placeholder.as_str());

    // split always yields at least one fragment
    let mut out = fragments.next().unwrap_or_default().to_string();
    for fragment in fragments {
        out.push_str(&generator());
        out.push_str(fragment);
    }
    out
}

/// Number of `<placeholder_name>` occurrences in `content`.
pub fn count(content: &str, placeholder_name: &str) -> usize {
    content.matches(&format!("<{}>", placeholder_name)).count()
}

/// A rendered `secure.conf` plus how many tokens went into it.
#[derive(Debug)]
pub struct Rendered {
    pub content: String,
    pub secrets: usize,
    pub keys: usize,
}

/// Fill a `secure.conf` template.
///
/// `<secret>` becomes a URL-safe secret and `<key>` an uppercase client id.
/// Secrets are substituted first.
pub fn render_secure(template: &str) -> Rendered {
    let secrets = count(template, SECRET_PLACEHOLDER);
    let with_secrets = substitute(template, SECRET_PLACEHOLDER, || {
        token::generate_secret(DEFAULT_SECRET_LENGTH)
    });

    let keys = count(&with_secrets, KEY_PLACEHOLDER);
    let content = substitute(&with_secrets, KEY_PLACEHOLDER, || {
        token::generate_client_id(DEFAULT_CLIENT_ID_LENGTH)
    });

    debug!(secrets, keys, "rendered secure config");

    Rendered {
        content,
        secrets,
        keys,
    }
}
