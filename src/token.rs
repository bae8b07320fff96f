//! Access Token Issuance
//!
//! Signed, stateless tokens carrying the authenticated user's identity.
//! Any party holding the shared signing secret can verify a token offline;
//! no server-side session record is kept and nothing is ever revoked.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AppError;
use crate::store::UserRecord;

/// Token lifetime. Expiry is always exactly one hour after issuance.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// Claims carried by an issued token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user's email
    pub email: String,
    /// Authenticated user's store id
    pub user_id: i32,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, always `iat + 3600`
    pub exp: i64,
}

/// Signs tokens with the process-wide secret.
///
/// Issuance is a pure computation over the user record and the clock; the
/// issuer holds no mutable state and is shared freely across requests.
pub struct TokenIssuer {
    encoding: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for a verified user record.
    pub fn issue(&self, user: &UserRecord) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            email: user.email.clone(),
            user_id: user.id,
            iat: now,
            exp: now + TOKEN_LIFETIME.as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("token signing failed: {e}")))
    }
}

/// Decode and verify a token with the shared secret.
///
/// Downstream consumers use the same routine to verify tokens without
/// contacting this service.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
