//! 도메인 계층
//!
//! 엔티티(저장 구조), DTO(요청/응답 구조), 모델(JWT 클레임 등)로 나뉩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{PendingRegistration, User};
pub use dto::{ConfirmEmailRequest, ConfirmEmailResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
pub use models::{TokenClaims, TokenKind, TokenPair};
