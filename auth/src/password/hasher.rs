use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use serde::Deserialize;

use super::errors::PasswordError;

/// Hashing scheme selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Argon2id,
    Argon2i,
    Argon2d,
}

impl PasswordScheme {
    fn algorithm(self) -> Algorithm {
        match self {
            PasswordScheme::Argon2id => Algorithm::Argon2id,
            PasswordScheme::Argon2i => Algorithm::Argon2i,
            PasswordScheme::Argon2d => Algorithm::Argon2d,
        }
    }
}

/// Password hashing implementation.
///
/// The scheme context is built once; clone or share the hasher instead of rebuilding it.
#[derive(Clone)]
pub struct PasswordHasher {
    context: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher for the given scheme with the crate's default cost parameters.
    pub fn new(scheme: PasswordScheme) -> Self {
        Self {
            context: Argon2::new(scheme.algorithm(), Version::V0x13, Params::default()),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.context
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The algorithm and parameters are taken from the stored PHC string, so hashes
    /// produced under a previously configured scheme keep verifying. Comparison of the
    /// derived output is constant-time.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .context
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(PasswordScheme::default())
    }
}
