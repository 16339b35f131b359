use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core::OsRng},
};

use helpers_core::config::PasswordConfig;
use helpers_core::error::{Category, Result};

/// Hashes passwords and checks candidates against stored hashes.
pub trait PasswordService: Send + Sync {
    /// ## Summary
    /// Hashes a password with a random salt.
    ///
    /// ## Errors
    /// Returns an internal server error if hashing fails.
    fn hash(&self, password: &str) -> Result<String>;

    /// ## Summary
    /// Verifies a password against a stored hash.
    ///
    /// ## Errors
    /// Returns an unauthorized error if the password does not match, or an
    /// internal server error if the stored hash cannot be parsed.
    fn check_password(&self, password: &str, hash: &str) -> Result<()>;
}

/// Argon2id password hashing producing PHC strings.
#[derive(Debug, Clone, Default)]
pub struct Argon2Passwords {
    argon2: Argon2<'static>,
}

impl Argon2Passwords {
    /// ## Summary
    /// Builds the service from configured cost parameters.
    ///
    /// ## Errors
    /// Returns an internal server error if the parameters are out of the
    /// ranges Argon2 accepts.
    pub fn new(config: &PasswordConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| {
            Category::InternalServerError
                .error(format!("invalid password hashing parameters: {e}"))
                .with_context("password", e.to_string())
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordService for Argon2Passwords {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                Category::InternalServerError.error(format!("failed to hash password: {e}"))
            })?;

        Ok(password_hash.to_string())
    }

    fn check_password(&self, password: &str, hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            Category::InternalServerError.error(format!("invalid password hash: {e}"))
        })?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|err| {
                tracing::trace!("Password verification failed: {}", err);
                match err {
                    password_hash::Error::Password => {
                        Category::Unauthorized.error("invalid password")
                    }
                    other => Category::InternalServerError
                        .error(format!("failed to verify password: {other}")),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_config() -> PasswordConfig {
        PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify_password() {
        let service = Argon2Passwords::new(&cheap_config()).expect("valid params");
        let password = "test_password_123";
        let hash = service.hash(password).expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(service.check_password(password, &hash).is_ok());

        let err = service
            .check_password("wrong_password", &hash)
            .expect_err("wrong password must fail");
        assert_eq!(err.category(), Category::Unauthorized);
    }

    #[test]
    fn test_hash_generates_different_salts() {
        let service = Argon2Passwords::default();
        let password = "same_password";
        let hash1 = service.hash(password).expect("Failed to hash password");
        let hash2 = service.hash(password).expect("Failed to hash password");

        // Hashes should be different due to different salts
        assert_ne!(hash1, hash2);

        assert!(service.check_password(password, &hash1).is_ok());
        assert!(service.check_password(password, &hash2).is_ok());
    }

    #[test]
    fn test_hash_verifies_under_other_params() {
        // Cost parameters are embedded in the PHC string.
        let hash = Argon2Passwords::new(&cheap_config())
            .expect("valid params")
            .hash("portable")
            .expect("hash");

        assert!(Argon2Passwords::default().check_password("portable", &hash).is_ok());
    }

    #[test_log::test]
    fn test_verify_invalid_hash_format() {
        let err = Argon2Passwords::default()
            .check_password("password", "not_a_valid_hash")
            .expect_err("malformed hash");
        assert_eq!(err.category(), Category::InternalServerError);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let config = PasswordConfig {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        };

        let err = Argon2Passwords::new(&config).expect_err("zero iterations");
        assert_eq!(err.category(), Category::InternalServerError);
        assert_eq!(err.context().map(|c| c.field.as_str()), Some("password"));
    }
}
