//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use workhub_shared::constants::{TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH};

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Unexpected token type: {0}")]
    WrongTokenType(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

pub struct JwtService {
    secret: String,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl JwtService {
    pub fn new(secret: String, access_expiry: i64, refresh_expiry: i64) -> Self {
        Self {
            secret,
            access_token_expiry: access_expiry,
            refresh_token_expiry: refresh_expiry,
        }
    }

    pub fn generate_access_token(&self, employee_id: &Uuid) -> Result<String, JwtError> {
        self.generate_token(employee_id, TOKEN_TYPE_ACCESS, self.access_token_expiry)
    }

    pub fn generate_refresh_token(&self, employee_id: &Uuid) -> Result<String, JwtError> {
        self.generate_token(employee_id, TOKEN_TYPE_REFRESH, self.refresh_token_expiry)
    }

    fn generate_token(
        &self,
        employee_id: &Uuid,
        token_type: &str,
        expiry: i64,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: employee_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type: token_type.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| JwtError::ValidationError(e.to_string()))
    }

    /// Validate a token and require it to be an access token.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = self.validate_token(token)?;
        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(JwtError::WrongTokenType(claims.token_type));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret".to_string(), 900, 604800)
    }

    #[test]
    fn test_access_token_round_trip() {
        let svc = service();
        let id = Uuid::new_v4();
        let token = svc.generate_access_token(&id).unwrap();
        let claims = svc.validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let svc = service();
        let token = svc.generate_refresh_token(&Uuid::new_v4()).unwrap();
        assert!(matches!(
            svc.validate_access_token(&token),
            Err(JwtError::WrongTokenType(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let svc = service();
        let token = svc.generate_access_token(&Uuid::new_v4()).unwrap();
        let other = JwtService::new("other-secret".to_string(), 900, 604800);
        assert!(other.validate_token(&token).is_err());
    }
}
