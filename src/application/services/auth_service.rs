//! Admin password verification.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Verifies admin credentials against the configured password.
///
/// The password is hashed once at startup and only digests are compared
/// afterwards. Comparing fixed-length digests instead of the raw strings
/// keeps the comparison independent of how much of the guess matches.
pub struct AuthService {
    password_digest: [u8; 32],
}

impl AuthService {
    pub fn new(admin_password: &str) -> Self {
        Self {
            password_digest: digest(admin_password),
        }
    }

    /// Checks a submitted password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on mismatch.
    pub fn verify(&self, candidate: &str) -> Result<(), AppError> {
        if digest(candidate) != self.password_digest {
            return Err(AppError::unauthorized("Invalid password"));
        }

        Ok(())
    }
}

fn digest(input: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_correct_password() {
        let service = AuthService::new("hunter2");
        assert!(service.verify("hunter2").is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let service = AuthService::new("hunter2");
        let err = service.verify("hunter3").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_empty_candidate() {
        let service = AuthService::new("hunter2");
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let service = AuthService::new("Hunter2");
        assert!(service.verify("hunter2").is_err());
    }
}
