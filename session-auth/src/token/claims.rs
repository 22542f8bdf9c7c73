use serde::Deserialize;
use serde::Serialize;

use crate::store::UserGroup;

/// Claims carried by a session token.
///
/// Built by the codec at login and decoded on every authenticated
/// request. `exp` is always `iat` plus the codec's validity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject: the user's opaque identifier.
    pub sub: String,

    /// Email of the user at issuance time.
    pub email: String,

    /// Legacy role label, if the record carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Legacy group memberships, if the record carries any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<UserGroup>>,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_claims_omitted_when_absent() {
        let claims = SessionClaims {
            sub: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            role: None,
            groups: None,
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        };

        let json = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert!(json.get("role").is_none());
        assert!(json.get("groups").is_none());
        assert_eq!(json["sub"], "user-1");
    }
}
