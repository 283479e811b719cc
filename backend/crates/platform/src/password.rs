//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, OWASP default parameters)
//! - Zeroization of clear-text input
//! - Constant-time verification
//! - A policy check for passwords chosen through the admin back office
//!
//! Login input is never policy-checked: an operator-seeded password that
//! would fail today's policy must still be able to sign in.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length in code points
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// A well-formed Argon2id hash with default parameters that no password
/// matches. Verifying against it costs the same as a real verification.
const DUMMY_PHC: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    /// One repeated character, or a plain run of ascending/descending digits
    #[error("Password follows a predictable pattern")]
    PredictablePattern,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a password that must satisfy the policy
    ///
    /// Unicode is NFKC-normalized before any check, and lengths are counted
    /// in code points rather than bytes.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::unchecked(raw);
        password.check_policy()?;
        Ok(password)
    }

    /// Create a password without applying the policy
    ///
    /// Used for login attempts and for operator-provided seed passwords.
    /// The same NFKC normalization is applied so hashes stay comparable.
    pub fn unchecked(raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        let mut raw = raw;
        raw.zeroize();
        Self(normalized)
    }

    fn check_policy(&self) -> Result<(), PasswordPolicyError> {
        let value = self.0.as_str();

        if value.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = value.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Space, tab and newline are allowed
        if value
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_single_repeated_char(value) || is_digit_run(value) {
            return Err(PasswordPolicyError::PredictablePattern);
        }

        Ok(())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        let mut bytes = self.as_bytes().to_vec();
        if let Some(pepper) = pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }

    /// Hash the password using Argon2id with a fresh 128-bit salt
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let mut password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(OsRng);

        let result = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        password_bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, parameters, salt and hash,
/// so verification needs nothing but this value.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares the derived output in constant time.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        verify_phc(&self.hash, password, pepper)
    }

    /// Spend the work of one verification and report failure
    ///
    /// Called when no stored hash exists for a login attempt, so that an
    /// unknown account takes as long to reject as a wrong password.
    pub fn verify_against_dummy(password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let _ = verify_phc(DUMMY_PHC, password, pepper);
        false
    }
}

fn verify_phc(phc: &str, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(phc) else {
        return false;
    };

    let mut password_bytes = password.peppered(pepper);
    let valid = Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();
    password_bytes.zeroize();

    valid
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_single_repeated_char(password: &str) -> bool {
    let mut chars = password.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Whole password is digits, each one step up (or down) from the previous
fn is_digit_run(password: &str) -> bool {
    let digits: Option<Vec<u32>> = password.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };

    let ascending = digits.windows(2).all(|w| w[1] == (w[0] + 1) % 10);
    let descending = digits.windows(2).all(|w| w[0] == (w[1] + 1) % 10);
    ascending || descending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_password_too_long() {
        let result = ClearTextPassword::new("ab".repeat(MAX_PASSWORD_LENGTH));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_blank() {
        for raw in ["", "          "] {
            let result = ClearTextPassword::new(raw.to_string());
            assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
        }
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defgh".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_password_predictable() {
        for raw in ["aaaaaaaaaa", "12345678", "9876543210", "7890123456"] {
            let result = ClearTextPassword::new(raw.to_string());
            assert!(
                matches!(result, Err(PasswordPolicyError::PredictablePattern)),
                "{raw} should be rejected"
            );
        }
        assert!(ClearTextPassword::new("13572468".to_string()).is_ok());
    }

    #[test]
    fn test_unicode_password() {
        let result = ClearTextPassword::new("パスワード安全です!".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_unchecked_skips_policy() {
        let password = ClearTextPassword::unchecked("admin123".to_string());
        let hashed = password.hash(None).unwrap();
        assert!(hashed.verify(&password, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();
        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash(Some(b"pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"pepper")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"other")));
    }

    #[test]
    fn test_nfkc_normalization_matches_equivalent_input() {
        // Full-width digits normalize to ASCII digits
        let hashed = ClearTextPassword::unchecked("secret１２３".to_string())
            .hash(None)
            .unwrap();
        let ascii = ClearTextPassword::unchecked("secret123".to_string());
        assert!(hashed.verify(&ascii, None));
    }

    #[test]
    fn test_phc_roundtrip_and_invalid_format() {
        let password = ClearTextPassword::unchecked("roundtrip-pass".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
        assert!(matches!(
            HashedPassword::from_phc_string("plaintext"),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_dummy_hash_is_well_formed_and_never_matches() {
        assert!(HashedPassword::from_phc_string(DUMMY_PHC).is_ok());
        let password = ClearTextPassword::unchecked("anything".to_string());
        assert!(!HashedPassword::verify_against_dummy(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::unchecked("SecretPassword123!".to_string());
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = password.hash(None).unwrap();
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
