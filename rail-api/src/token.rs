use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rail_core::{CoreError, CoreResult, SessionClaims, TokenIssuer};
use rail_shared::UserAccount;
use uuid::Uuid;

/// HS256 session tokens. Each token gets a fresh `jti`, so repeated logins never repeat a token.
pub struct JwtTokenIssuer {
    secret: String,
    expiration_seconds: u64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, expiration_seconds: u64) -> Self {
        Self {
            secret: secret.to_string(),
            expiration_seconds,
        }
    }

    pub fn verify(&self, token: &str) -> CoreResult<SessionClaims> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| CoreError::IdentityError(format!("Token rejected: {}", e)))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, account: &UserAccount) -> CoreResult<String> {
        let expires_at = i64::try_from(self.expiration_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                CoreError::InternalError(format!(
                    "Token expiry of {}s is out of range",
                    self.expiration_seconds
                ))
            })?;

        let claims = SessionClaims {
            sub: account.id.to_string(),
            name: account.name.clone(),
            role: "CUSTOMER".to_owned(),
            jti: Uuid::new_v4().to_string(),
            exp: expires_at.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
            .map_err(|e| CoreError::IdentityError(format!("Token encoding failed: {}", e)))
    }
}
