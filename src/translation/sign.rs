//! Request signing shared by the providers.
//!
//! Each provider concatenates its own ordered list of fields
//! (app key, text, salt, curtime, app secret) and hashes the result.

use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Texts up to this many characters are signed verbatim.
const TRUNCATE_THRESHOLD: usize = 20;
/// Characters kept from each end of a longer text.
const TRUNCATE_EDGE: usize = 10;

/// Last salt handed out by [`Nonce::now`], in milliseconds.
static LAST_SALT: AtomicU64 = AtomicU64::new(0);

/// Computes the lowercase hex SHA-256 digest of the concatenated fields.
pub fn sign<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update(field.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Bounded-length form of `text` used as signature input.
///
/// Texts of at most 20 characters are returned unchanged. Longer texts become
/// the first 10 characters, the decimal character count, then the last 10
/// characters. Lengths are counted in Unicode scalar values.
pub fn truncate(text: &str) -> Cow<'_, str> {
    let len = text.chars().count();
    if len <= TRUNCATE_THRESHOLD {
        return Cow::Borrowed(text);
    }

    let head: String = text.chars().take(TRUNCATE_EDGE).collect();
    let tail: String = text.chars().skip(len - TRUNCATE_EDGE).collect();
    Cow::Owned(format!("{head}{len}{tail}"))
}

/// Per-request salt and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    /// Milliseconds since the Unix epoch; strictly increasing within a process.
    pub salt: String,
    /// Seconds since the Unix epoch, rounded to the nearest second.
    pub curtime: String,
}

impl Nonce {
    /// Generates a fresh nonce from the system clock.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();

        // Two calls in the same millisecond still get distinct salts.
        let previous = LAST_SALT
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last.saturating_add(1)))
            })
            .unwrap_or(millis);
        let salt = millis.max(previous.saturating_add(1));

        Self {
            salt: salt.to_string(),
            curtime: ((millis + 500) / 1000).to_string(),
        }
    }

    /// Builds a nonce from fixed values.
    pub fn from_parts(salt: impl Into<String>, curtime: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            curtime: curtime.into(),
        }
    }
}
