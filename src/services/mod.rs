//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소와 발송기를 trait 객체로 주입받아 생성되며,
//! [`AppContext`](crate::core::context::AppContext)가 한 번 만들어 핸들러에 공유합니다.
//!
//! # Features
//!
//! - 이메일 인증 기반 가입 (가입 대기 → 확정)
//! - JWT 토큰 기반 로그인
//! - 인증 코드 메일 발송 (Brevo / 메모리)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let token_service = Arc::new(TokenService::from_env());
//! let user_service = UserService::new(user_store, token_service);
//! ```

pub mod users;
pub mod auth;
pub mod email;
