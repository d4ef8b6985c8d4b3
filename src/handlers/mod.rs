//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)     
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 가입/인증/로그인                     ← Service Layer  
//! ├─────────────────────────────────────────────┤
//!   Stores - 확정 계정 / 가입 대기 레코드            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! - **주입된 컨텍스트**: 서비스는 `web::Data<AppContext>`로 전달받음
//! - **자동 역직렬화**: 누락된 필드는 빈 문자열로 채워지고 서비스가 검증
//! - **통합 에러 타입**: `AppError`가 `{"error": ...}` 응답으로 변환됨
//!
//! ```rust,ignore
//! #[post("/register")]
//! pub async fn register(
//!     ctx: web::Data<AppContext>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = ctx.registration_service.register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod auth;
