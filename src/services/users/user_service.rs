//! # 로그인 서비스 구현
//!
//! 확정 계정의 이메일/비밀번호를 검증하고 JWT 토큰 쌍을 발급합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 검증**: 가입 단계에서 저장한 해시와 비교
//! - **동일한 실패 메시지**: 계정 없음과 비밀번호 불일치를 구분하지 않음
//! - **민감 정보 제거**: 응답의 `user`에는 비밀번호 해시가 포함되지 않음

use std::sync::Arc;
use bcrypt::verify;
use log::{info, warn};
use crate::{
    domain::dto::users::{
        request::{auth_request::LOGIN_REQUIRED_MESSAGE, LoginRequest},
        response::{LoginResponse, UserResponse},
    },
    errors::errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::TokenService,
    utils::string_utils::normalize_email,
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email ou senha inválidos.";

/// 로그인 비즈니스 로직 서비스
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, token_service: Arc<TokenService>) -> Self {
        Self { user_store, token_service }
    }

    /// 자격 증명을 확인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이메일 또는 비밀번호 누락
    /// * `CredentialError` - 계정 없음 또는 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        if request.missing_required() {
            return Err(AppError::ValidationError(LOGIN_REQUIRED_MESSAGE.to_string()));
        }

        let email = normalize_email(&request.email);

        let user = match self.user_store.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!("⚠️ 로그인 실패 (계정 없음): {}", email);
                return Err(AppError::CredentialError(INVALID_CREDENTIALS_MESSAGE.to_string()));
            }
        };

        let is_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            warn!("⚠️ 로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::CredentialError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let tokens = self.token_service.generate_token_pair(&user)?;

        info!("🔐 로그인 성공: {}", email);

        Ok(LoginResponse {
            user: UserResponse::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            token_type: "Bearer".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;
    use crate::{domain::entities::users::User, repositories::users::InMemoryUserStore};

    async fn service_with_user() -> UserService {
        let store = Arc::new(InMemoryUserStore::new());
        store.insert(User {
            id: None,
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: bcrypt::hash("p1", 4).unwrap(),
            role: "user".to_string(),
            is_email_verified: true,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }).await.unwrap();

        UserService::new(store, Arc::new(TokenService::new("test-secret", 1, 7)))
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_login_success() {
        let service = service_with_user().await;

        let response = service.login(login("A@x.com", "p1")).await.unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.user.email, "a@x.com");
        assert!(!response.access_token.is_empty());
        assert!(!response.refresh_token.is_empty());
    }

    #[actix_web::test]
    async fn test_login_wrong_password_and_unknown_email() {
        let service = service_with_user().await;

        let wrong = service.login(login("a@x.com", "nope")).await.unwrap_err();
        let unknown = service.login(login("b@x.com", "p1")).await.unwrap_err();

        assert!(matches!(wrong, AppError::CredentialError(_)));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[actix_web::test]
    async fn test_login_missing_fields() {
        let service = service_with_user().await;
        let err = service.login(login("a@x.com", "")).await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_REQUIRED_MESSAGE);
    }
}
