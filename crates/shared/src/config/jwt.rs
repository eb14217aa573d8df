use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError, model::UserRole};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(
        &self,
        user_id: Uuid,
        role: UserRole,
        token_type: &str,
    ) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(60)).timestamp() as usize,
            "refresh" => (now + Duration::days(7)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp,
            iat,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<TokenClaims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|_| ServiceError::InvalidTokenType)?;

        Ok(TokenClaims {
            user_id,
            role: token_data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_access_token() {
        let jwt = JwtConfig::new("test-secret");
        let id = Uuid::new_v4();

        let token = jwt.generate_token(id, UserRole::Admin, "access").unwrap();
        let claims = jwt.verify_token(&token, "access").unwrap();

        assert_eq!(claims.user_id, id);
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn rejects_wrong_token_type() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt
            .generate_token(Uuid::new_v4(), UserRole::User, "refresh")
            .unwrap();

        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(ServiceError::InvalidTokenType)
        ));
    }

    #[test]
    fn rejects_unknown_token_type_on_generate() {
        let jwt = JwtConfig::new("test-secret");

        assert!(matches!(
            jwt.generate_token(Uuid::new_v4(), UserRole::User, "session"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
