//! JWT 토큰 관리 서비스 구현
//!
//! 로그인에 성공한 계정에 HS256 서명 액세스/리프레시 토큰 쌍을 발급합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use crate::{
    config::JwtConfig,
    domain::{
        entities::users::user::User,
        models::token::{TokenClaims, TokenKind, TokenPair},
    },
    errors::errors::{AppError, AppResult},
};

/// JWT 토큰 관리 서비스
///
/// 서명 키와 만료 정책을 생성 시점에 받아 보관합니다.
/// 운영에서는 [`TokenService::from_env`], 테스트에서는 [`TokenService::new`]로 만듭니다.
pub struct TokenService {
    secret: String,
    access_hours: i64,
    refresh_days: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, access_hours: i64, refresh_days: i64) -> Self {
        Self {
            secret: secret.into(),
            access_hours,
            refresh_days,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS`, `JWT_REFRESH_EXPIRATION_DAYS`
    pub fn from_env() -> Self {
        Self::new(
            JwtConfig::secret(),
            JwtConfig::expiration_hours(),
            JwtConfig::refresh_expiration_days(),
        )
    }

    fn encode_claims(&self, user: &User, kind: TokenKind, lifetime: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            role: user.role.clone(),
            kind,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        self.encode_claims(user, TokenKind::Access, Duration::hours(self.access_hours))
    }

    /// 사용자를 위한 리프레시 토큰 생성
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        self.encode_claims(user, TokenKind::Refresh, Duration::days(self.refresh_days))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&user)?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;
        let expires_in = self.access_hours * 3600; // 초 단위로 변환

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::users::user::User;

    fn decode_claims(secret: &str, token: &str) -> jsonwebtoken::errors::Result<TokenClaims> {
        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_ref()), &Validation::default())
            .map(|data| data.claims)
    }

    fn user() -> User {
        User {
            id: Some(ObjectId::new()),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            role: "user".to_string(),
            is_email_verified: true,
            created_at: mongodb::bson::DateTime::now(),
            updated_at: mongodb::bson::DateTime::now(),
        }
    }

    #[test]
    fn test_token_pair_round_trip_claims() {
        let service = TokenService::new("test-secret", 24, 7);
        let user = user();

        let pair = service.generate_token_pair(&user).unwrap();
        assert_eq!(pair.expires_in, 24 * 3600);

        let access = decode_claims("test-secret", &pair.access_token).unwrap();
        assert_eq!(access.sub, user.id_string().unwrap());
        assert_eq!(access.email, "a@x.com");
        assert_eq!(access.kind, TokenKind::Access);

        let refresh = decode_claims("test-secret", &pair.refresh_token).unwrap();
        assert_eq!(refresh.kind, TokenKind::Refresh);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = TokenService::new("secret-a", 1, 1).generate_token_pair(&user()).unwrap();
        let err = decode_claims("secret-b", &pair.access_token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_expired_token_rejected() {
        // 기본 leeway(60초)보다 충분히 과거
        let service = TokenService::new("test-secret", -1, 1);
        let token = service.generate_access_token(&user()).unwrap();
        let err = decode_claims("test-secret", &token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_user_without_id_fails() {
        let mut user = user();
        user.id = None;
        let err = TokenService::new("s", 1, 1).generate_access_token(&user).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
