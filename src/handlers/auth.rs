//! Authentication HTTP Handlers
//!
//! 가입, 이메일 인증, 로그인 엔드포인트입니다. 핸들러는 요청 본문을 서비스에
//! 넘기고 결과를 JSON으로 돌려주는 일만 하며, 실패는 `AppError`가
//! `400 {"error": ...}` (내부 오류는 500) 응답으로 변환합니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/register` - 가입 요청, 인증 코드 메일 발송
//! - `POST /api/v1/auth/confirm-email` - 인증 코드 확인, 계정 확정
//! - `POST /api/v1/auth/login` - 이메일/패스워드 로그인, JWT 발급
use actix_web::{post, web, HttpResponse};
use crate::{
    core::context::AppContext,
    domain::dto::users::request::{ConfirmEmailRequest, LoginRequest, RegisterRequest},
    errors::errors::AppError,
};

/// 가입 요청 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/register`
///
/// ```json
/// { "name": "Ana", "email": "a@x.com", "password": "p1", "role": "user" }
/// ```
///
/// 성공 시 `200 {"message": "Token enviado por email."}`
#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.registration_service
        .register(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이메일 인증 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/confirm-email`
#[post("/confirm-email")]
pub async fn confirm_email(
    ctx: web::Data<AppContext>,
    payload: web::Json<ConfirmEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.registration_service
        .confirm_email(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// 응답: `{user, access_token, refresh_token, expires_in, token_type: "Bearer"}`
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.user_service
        .login(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
