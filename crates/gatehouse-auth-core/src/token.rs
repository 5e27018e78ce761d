//! Token minting and validation (HS256 JWT)
//!
//! The issuer is pure and stateless: it never persists tokens, and the
//! server-side session record alone decides whether a cryptographically
//! valid token is still authoritative.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::AuthError;

/// Claims embedded in an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject - the username the token was issued for
    pub sub: String,
    /// Token ID; makes every minted token unique even within one second
    pub jti: String,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
    /// Extra claims supplied at mint time
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl TokenClaims {
    /// Check if the claims are past their expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Mints and validates signed tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    validation: Validation,
}

impl TokenIssuer {
    /// Create a new issuer from a shared secret
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew leeway: an expired token is expired
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime,
            validation,
        }
    }

    /// Mint a signed token for a subject, with optional extra claims
    pub fn mint(
        &self,
        subject: &str,
        extra: BTreeMap<String, Value>,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + self.lifetime.as_secs() as i64,
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!("token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&[7u8; 32], Duration::from_secs(3600))
    }

    #[test]
    fn test_mint_decode_roundtrip() {
        let issuer = issuer();
        let token = issuer.mint("alice", BTreeMap::new()).unwrap();

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(!claims.is_expired());
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_minted_tokens_are_unique() {
        let issuer = issuer();
        let t1 = issuer.mint("alice", BTreeMap::new()).unwrap();
        let t2 = issuer.mint("alice", BTreeMap::new()).unwrap();
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_extra_claims_roundtrip() {
        let issuer = issuer();
        let mut extra = BTreeMap::new();
        extra.insert("role".to_string(), Value::String("admin".to_string()));

        let token = issuer.mint("alice", extra).unwrap();
        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.extra.get("role"), Some(&Value::String("admin".into())));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = TokenIssuer::new(&[1u8; 32], Duration::from_secs(3600));
        let verifier = TokenIssuer::new(&[2u8; 32], Duration::from_secs(3600));

        let token = signer.mint("alice", BTreeMap::new()).unwrap();
        assert!(matches!(
            verifier.decode(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let token = issuer.mint("alice", BTreeMap::new()).unwrap();

        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        assert!(matches!(
            issuer.decode(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let issuer = issuer();
        for garbage in ["", "no-dots-here", "a.b", "a.b.c.d", "!!!.###.$$$"] {
            assert!(matches!(
                issuer.decode(garbage),
                Err(AuthError::InvalidToken)
            ));
        }
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();

        // Encode claims that expired an hour ago with the same secret
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "alice".to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
            extra: BTreeMap::new(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&[7u8; 32]),
        )
        .unwrap();

        assert!(matches!(
            issuer.decode(&token),
            Err(AuthError::TokenExpired)
        ));
    }
}
