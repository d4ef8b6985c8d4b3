//! API 라우트 설정 모듈
//!
//! 인증 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `POST /api/v1/auth/register`
//! - `POST /api/v1/auth/confirm-email`
//! - `POST /api/v1/auth/login`
//! - `GET /health`
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes);
//! ```

use crate::core::context::AppContext;
use crate::errors::errors::AppError;
use crate::handlers;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러는 `web::Data<AppContext>`가 앱에 등록되어 있다고 가정합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ana","email":"a@x.com","password":"p1","role":"user"}'
///
/// curl -X POST http://localhost:8080/api/v1/auth/confirm-email \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@x.com","token":"AbC123xY"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .app_data(json_config())
            .service(handlers::auth::register)
            .service(handlers::auth::confirm_email)
            .service(handlers::auth::login)
    );
}

/// 잘못된 JSON 본문도 다른 검증 실패와 같은 `400 {"error": ...}` 형식으로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            AppError::ValidationError(format!("Corpo da requisição inválido: {}", err)).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "hit_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "pending_registrations": 0,
///   "features": {
///     "user_store": "mongodb",
///     "pending_store": "memory",
///     "email": "brevo"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(ctx: web::Data<AppContext>) -> actix_web::HttpResponse {
    // 저장소 조회에 실패해도 헬스체크는 응답하고 개수만 null로 둠
    let pending_registrations = match ctx.pending_store.len().await {
        Ok(count) => Some(count),
        Err(e) => {
            log::warn!("⚠️ 가입 대기 레코드 수 조회 실패: {}", e);
            None
        }
    };

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "pending_registrations": pending_registrations,
        "features": {
            "user_store": ctx.user_store.backend_name(),
            "pending_store": ctx.pending_store.backend_name(),
            "email": ctx.email_sender.provider_name()
        }
    }))
}
