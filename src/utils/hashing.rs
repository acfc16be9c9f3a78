use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::types::error::AppError;

/// One-way, salted password hash. `cost` is the memory exponent: the hash
/// uses 2^cost KiB. Costs the library refuses come back as `Config`.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AppError> {
    let m_cost = 1u32
        .checked_shl(cost)
        .ok_or_else(|| AppError::Config(format!("hash cost {cost} out of range")))?;
    let params = Params::new(m_cost, Params::DEFAULT_T_COST, Params::DEFAULT_P_COST, None)
        .map_err(|e| AppError::Config(format!("hash cost {cost} rejected: {e}")))?;

    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Compare a candidate against a stored PHC string. A stored hash that does
/// not parse fails closed: the caller just sees a mismatch.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("Abcdefg1", 10).unwrap();
        assert!(verify_password("Abcdefg1", &hash));
        assert!(!verify_password("Abcdefg2", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("Abcdefg1", 10).unwrap();
        let b = hash_password("Abcdefg1", 10).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn cost_below_library_minimum_is_config_error() {
        // 2^2 KiB is under argon2's minimum memory cost
        let err = hash_password("Abcdefg1", 2).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn absurd_cost_is_config_error() {
        let err = hash_password("Abcdefg1", 40).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn malformed_stored_hash_fails_closed() {
        assert!(!verify_password("Abcdefg1", "not-a-phc-string"));
        assert!(!verify_password("Abcdefg1", ""));
    }
}
