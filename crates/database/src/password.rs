//! Password hashing.
//!
//! Bcrypt with a work factor of 10, matching the registration flow's
//! requirement that verification takes tens of milliseconds on commodity
//! hardware. Bcrypt's salt is embedded in the hash string.

use crate::error::Result;

/// Bcrypt cost factor for new hashes.
const HASH_COST: u32 = 10;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Verify a submitted password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hash)?)
}
