//! Password hashing and verification.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password with a fresh random salt.
///
/// Only fails if the system entropy source is broken, which callers treat
/// as an internal error.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// Returns false on mismatch and on malformed hashes; never surfaces an
/// error to the login path, so both cases look identical to the caller.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}
