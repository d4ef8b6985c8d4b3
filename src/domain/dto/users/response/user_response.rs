//! 응답 DTO
//!
//! 엔티티에서 민감 정보(비밀번호 해시)를 제거한 응답 구조체들입니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_email_verified: bool,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            is_email_verified,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            is_email_verified,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// `{ "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 이메일 인증 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmEmailResponse {
    pub message: String,
    pub user: UserResponse,
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$secret".to_string(),
            role: "user".to_string(),
            is_email_verified: true,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
        assert!(!json["created_at"].as_str().unwrap().is_empty());
    }
}
