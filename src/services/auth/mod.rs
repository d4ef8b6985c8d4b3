//! 인증 서비스 모듈
//! 
//! 로그인 성공 시 발급하는 JWT 토큰을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 액세스/리프레시 토큰 용도(`kind`) 구분
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//! 
//! let token_service = TokenService::from_env();
//! let tokens = token_service.generate_token_pair(&user)?;
//! ```

pub mod token_service;

pub use token_service::*;
