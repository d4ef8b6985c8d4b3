//! 사용자 계정 서비스 모듈
//! 
//! 가입/이메일 인증과 로그인 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 가입 요청 검증 및 인증 코드 발송
//! - 인증 코드 확인 후 확정 계정 생성
//! - 비밀번호 검증 및 JWT 발급
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (가입 대기 단계부터 해시만 보관)
//! - 이메일 중복 방지
//! - 인증 코드 1회 사용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::RegistrationService;
//! 
//! let response = ctx.registration_service.register(request).await?;
//! ```

pub mod registration_service;
pub mod user_service;

pub use registration_service::{RegistrationService, RegistrationSettings};
pub use user_service::UserService;
