use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Window in which a mailed code is accepted.
pub fn code_ttl() -> Duration {
    Duration::minutes(10)
}

/// Uniform 6-digit code, zero-padded.
pub fn generate_code() -> String {
    let n: u32 = rand::rngs::OsRng.gen_range(0..1_000_000);
    format!("{n:06}")
}

/// Keyed commitment stored in place of the plaintext code.
pub fn commit_code(code: &str, key: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC-SHA256 accepts any key length");
    mac.update(code.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub struct CodeCheck {
    pub valid: bool,
    pub expired: bool,
}

/// Match and expiry are evaluated independently so a stale-but-correct code
/// can be reported as expired rather than invalid.
pub fn check_code(
    code: &str,
    key: &str,
    commitment: &str,
    issued_at: DateTime<Utc>,
    ttl: Duration,
) -> CodeCheck {
    CodeCheck {
        valid: commit_code(code, key) == commitment,
        expired: Utc::now() - issued_at > ttl,
    }
}
