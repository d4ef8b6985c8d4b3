//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소마다 async trait을 하나씩 두고, 실제 구현은 설정에 따라
//! [`AppContext`](crate::core::context::AppContext)가 골라 주입합니다.
//!
//! - [`users`]: 확정 계정 (MongoDB 또는 메모리)
//! - [`pending`]: 이메일 인증을 기다리는 가입 대기 레코드 (메모리 또는 Redis)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserStore;
//!
//! let user = ctx.user_store.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod pending;
