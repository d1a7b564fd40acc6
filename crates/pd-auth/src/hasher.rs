//! Password hashing over bcrypt.

use crate::error::{AuthError, Result};

/// Minimum bcrypt work factor accepted by [`hash_password_with_cost`].
pub const MIN_COST: u32 = 4;

/// Maximum bcrypt work factor accepted by [`hash_password_with_cost`].
pub const MAX_COST: u32 = 31;

/// Length of a bcrypt modular-crypt encoding.
const ENCODED_LEN: usize = 60;

/// A bcrypt-encoded credential hash.
///
/// Opaque to callers: the algorithm identifier, cost, salt, and digest are
/// embedded in the encoding and never exposed individually. Verification
/// does not mutate the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap an encoded hash, rejecting values not in modular crypt format.
    pub fn parse(encoded: &str) -> Result<Self> {
        if !encoded.starts_with("$2") || encoded.len() != ENCODED_LEN {
            return Err(AuthError::InvalidHash(encoded.to_string()));
        }
        Ok(Self(encoded.to_string()))
    }

    /// The encoded hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The encoded hash as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash a password with a fresh random salt at the default work factor.
///
/// Two calls with the same password produce different encodings (the salt
/// is random), yet both verify against that password.
pub fn hash_password(password: &str) -> Result<HashedPassword> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

/// Hash a password at an explicit work factor.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<HashedPassword> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(AuthError::InvalidCost(cost));
    }
    let encoded = bcrypt::hash(password, cost)?;
    Ok(HashedPassword(encoded))
}

/// Check a password against a stored hash.
///
/// Recomputes the digest with the salt embedded in `hashed` and compares in
/// constant time. Returns `Ok(true)` iff the digests match; a hash that
/// parses but fails to decode is an error rather than a mismatch.
pub fn verify_password(hashed: &HashedPassword, password: &str) -> Result<bool> {
    match bcrypt::verify(password, hashed.as_str()) {
        Ok(matched) => Ok(matched),
        Err(bcrypt::BcryptError::InvalidHash(h)) => Err(AuthError::InvalidHash(h)),
        Err(err) => Err(AuthError::Bcrypt(err)),
    }
}
