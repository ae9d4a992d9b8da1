//! Scrubbing of raw database error text before it reaches the logs.
//!
//! Driver messages can echo bound parameters (question and answer text typed
//! by users) and connection strings. Quoted literals, URL credentials and
//! long opaque tokens are masked; everything else is kept so the message
//! stays useful.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

struct Patterns {
    url_credentials: Regex,
    quoted: Regex,
    token: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Patterns {
        url_credentials: Regex::new(r"(?P<scheme>[a-z][a-z0-9+.-]*://[^:/@\s]+):[^@\s]+@").unwrap(),
        quoted: Regex::new(r#"'(?:[^']|'')*'|"(?:[^"\\]|\\.)*""#).unwrap(),
        token: Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap(),
    }
});

/// Mask sensitive fragments of `input`.
///
/// Order matters: credentials first so the password is gone before the
/// token pass, then quoted literals, then bare tokens.
pub fn redact(input: &str) -> String {
    let p = &*PATTERNS;
    let out = p.url_credentials.replace_all(input, "$scheme:***@");
    let out = p.quoted.replace_all(&out, "'[REDACTED]'");
    p.token.replace_all(&out, "[REDACTED_TOKEN]").into_owned()
}

/// Formats the wrapped string through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
