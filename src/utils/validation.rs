use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // restricted TLD allow-list, matching what signups historically accepted
        Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.(com|net)$").expect("email regex compiles")
    })
}

/// Normalize (trim + lowercase) and shape-check an address. Returns the
/// normalized form so lookups and storage agree on casing.
pub fn validate_email(email: &str) -> Result<String, String> {
    let email = email.trim().to_lowercase();
    if email.len() < 5 {
        return Err("Email must be at least 5 characters long".to_string());
    }
    if email.len() > 60 {
        return Err("Email must be at most 60 characters long".to_string());
    }
    if !email_re().is_match(&email) {
        return Err("Email must be a valid .com or .net address".to_string());
    }
    Ok(email)
}

/// At least 8 chars with one lowercase, one uppercase and one digit. The
/// `regex` crate has no lookahead, so the classes are checked directly.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a digit".to_string());
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), String> {
    if code.is_empty() || code.len() > 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Code must be numeric, at most 6 digits".to_string());
    }
    Ok(())
}

pub fn validate_post(title: &str, description: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if description.trim().is_empty() {
        return Err("Description is required".to_string());
    }
    Ok(())
}
