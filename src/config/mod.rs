//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env.{PROFILE}` 파일은 `main`에서 `dotenv`로 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 실행 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT, 가입 인증 코드, 메일 발송 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, VerificationConfig};
//!
//! let port = ServerConfig::port();
//! let ttl = VerificationConfig::pending_ttl_minutes();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
