//! # Application Error Handling
//!
//! 계정 등록/이메일 인증/로그인 흐름에서 발생하는 모든 에러를 하나의 열거형으로 다룹니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?`로 반환한 에러가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 | 필수 필드 누락, 이메일 형식 오류 |
//! | `DuplicateEmailError` | 400 | 이미 가입된 이메일로 가입 시도 |
//! | `DeliveryError` | 400 | 인증 코드 메일 발송 실패 |
//! | `VerificationError` | 400 | 토큰 불일치, 대기 중인 가입 없음 |
//! | `CredentialError` | 400 | 로그인 실패 |
//! | `DatabaseError` | 400 | MongoDB 조회/저장 실패 |
//! | `RedisError` | 400 | 대기 가입 저장소(Redis) 실패 |
//! | `InternalError` | 500 | 예상하지 못한 시스템 오류 |
//!
//! 클라이언트는 실패 종류와 무관하게 같은 형태의 응답을 받습니다:
//!
//! ```json
//! { "error": "email já cadastrado." }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형의 문자열은 사용자에게 그대로 노출되는 메시지입니다.
/// 따라서 `Display` 구현은 접두어 없이 메시지만 출력합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 입력 누락 또는 형식 오류
    #[error("{0}")]
    ValidationError(String),

    /// 이미 확정된 계정이 존재하는 이메일
    #[error("{0}")]
    DuplicateEmailError(String),

    /// 이메일 발송 실패
    #[error("{0}")]
    DeliveryError(String),

    /// 인증 토큰 불일치 또는 대기 중인 가입 없음
    #[error("{0}")]
    VerificationError(String),

    /// 로그인 자격 증명 실패
    #[error("{0}")]
    CredentialError(String),

    /// 사용자 저장소(MongoDB) 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 대기 가입 저장소(Redis) 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// 모든 에러를 `{"error": "<message>"}` 형식의 JSON으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let body = serde_json::to_string(&payload)
///     .context("메일 페이로드 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_domain_errors_are_bad_request() {
        let errors = [
            AppError::ValidationError("Todos os campos são obrigatórios!".to_string()),
            AppError::DuplicateEmailError("email já cadastrado.".to_string()),
            AppError::DeliveryError("smtp down".to_string()),
            AppError::VerificationError("Token inválido.".to_string()),
            AppError::CredentialError("Email ou senha inválidos.".to_string()),
            AppError::DatabaseError("connection reset".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_carries_message_only() {
        let error = AppError::DuplicateEmailError("email já cadastrado.".to_string());
        let body = error.error_response().into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "email já cadastrado." }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
