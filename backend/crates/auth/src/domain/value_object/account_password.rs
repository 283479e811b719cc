//! Account Password Value Object
//!
//! Domain wrapper around `platform::password`. Passwords chosen through the
//! back office go through the policy; login attempts and the bootstrap seed
//! do not.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Clear-text password from a request. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// A new password for an account, checked against the policy
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("Password must be at least {} characters", min))
                    .with_action("Please choose a longer password")
            }
            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("Password must be at most {} characters", max))
                    .with_action("Please choose a shorter password")
            }
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any control characters")
            }
            PasswordPolicyError::PredictablePattern => {
                AppError::bad_request("Password follows a predictable pattern")
                    .with_action("Please choose a less predictable password")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// A password as typed at the login form, or supplied by the operator
    /// for the bootstrap account
    pub fn unchecked(raw: String) -> Self {
        Self(ClearTextPassword::unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Account Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string as stored in `accounts.password_hash`
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AppError::internal("Invalid password hash in database"))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// Burn the same Argon2 work as [`verify`](Self::verify) when there is
    /// no account to check against. Always `false`.
    pub fn verify_dummy(raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        HashedPassword::verify_against_dummy(raw.inner(), pepper)
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_policy_applies_to_new_passwords() {
        assert!(RawPassword::new("correct horse".to_string()).is_ok());

        let err = RawPassword::new("short".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        assert!(RawPassword::new("aaaaaaaaaa".to_string()).is_err());
        assert!(RawPassword::new("12345678".to_string()).is_err());
        assert!(RawPassword::new("        ".to_string()).is_err());
    }

    #[test]
    fn test_unchecked_skips_policy() {
        let raw = RawPassword::unchecked("admin123".to_string());
        let hashed = AccountPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&RawPassword::unchecked("admin123".to_string()), None));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("Gallery-Keeper-9".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, None).unwrap();

        assert!(hashed.verify(&raw, None));
        let wrong = RawPassword::unchecked("Gallery-Keeper-8".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_pepper_must_match() {
        let raw = RawPassword::new("Gallery-Keeper-9".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        assert!(hashed.verify(&raw, Some(b"pepper")));
        assert!(!hashed.verify(&raw, None));
    }

    #[test]
    fn test_phc_roundtrip_and_garbage() {
        let raw = RawPassword::new("Gallery-Keeper-9".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, None).unwrap();
        let restored = AccountPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));

        assert!(AccountPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_dummy_never_matches() {
        let raw = RawPassword::unchecked("anything at all".to_string());
        assert!(!AccountPassword::verify_dummy(&raw, None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("Secret-Words-42".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("Secret"));
    }
}
