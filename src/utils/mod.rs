//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 이메일 정규화
//! - [`token_generator`] - 메일 인증 코드 생성
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::token_generator::generate_verification_token;
//!
//! let code = generate_verification_token(8);
//! ```

pub mod string_utils;
pub mod token_generator;
pub mod display_terminal;
