//! Token Claims
//!
//! Payload carried inside the signed `token` cookie, and the client-facing
//! projection derived from it.

use kernel::id::AccountId;
use serde::{Deserialize, Serialize};

/// JWT payload
///
/// `iat` and `exp` are Unix seconds. The token is expired once `now >= exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClaims {
    pub sub: AccountId,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccountClaims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Client-safe identity; never includes the password hash
    pub fn session(&self) -> SessionAccount {
        SessionAccount {
            id: self.sub,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Session projection returned by login and `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAccount {
    pub id: AccountId,
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: i64) -> AccountClaims {
        AccountClaims {
            sub: AccountId::new(),
            email: "admin@school.org".to_string(),
            name: "Admin".to_string(),
            iat: exp - 7200,
            exp,
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let c = claims(1_000);
        assert!(!c.is_expired_at(999));
        assert!(c.is_expired_at(1_000));
        assert!(c.is_expired_at(1_001));
    }

    #[test]
    fn test_serialized_shape() {
        let c = claims(1_000);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["sub"], c.sub.to_string());
        assert_eq!(json["exp"], 1_000);
        assert_eq!(json["iat"], -6_200);
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_session_projection() {
        let c = claims(1_000);
        let s = c.session();
        assert_eq!(s.id, c.sub);
        assert_eq!(s.name, "Admin");
    }
}
