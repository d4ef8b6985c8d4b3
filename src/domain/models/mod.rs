//! 도메인 모델
//!
//! 저장되지 않고 서비스 사이에서만 오가는 구조체들입니다.

pub mod token;

pub use token::*;
