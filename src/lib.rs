//! HIT 인증 서비스 백엔드
//!
//! 이메일 인증 코드 기반 회원가입과 JWT 로그인을 제공하는 인증 서비스입니다.
//!
//! # Features
//!
//! - **가입 대기**: 가입 요청을 TTL이 있는 대기 저장소에 보관하고 인증 코드를 메일로 발송
//! - **이메일 인증**: 코드가 일치하면 대기 레코드를 확정 계정으로 전환 (코드당 1회)
//! - **JWT 인증**: 로그인 시 액세스/리프레시 토큰 발급
//! - **MongoDB**: 확정 계정 영구 저장 (이메일 유니크 인덱스)
//! - **Redis**: 여러 인스턴스가 공유하는 가입 대기 저장소 (선택)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/인증/로그인 (AppContext가 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / PendingRegistrationStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use hit_auth_backend::core::AppContext;
//!
//! let context = AppContext::from_env().await?;
//! context.registration_service.register(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
