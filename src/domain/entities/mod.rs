//! 도메인 엔티티
//!
//! - [`users`] - 이메일 인증을 마친 확정 계정
//! - [`pending`] - 이메일 인증을 기다리는 가입 요청

pub mod users;
pub mod pending;

pub use users::*;
pub use pending::*;
