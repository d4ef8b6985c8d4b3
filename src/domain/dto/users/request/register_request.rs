//! # 가입 요청 DTO
//!
//! `POST /api/v1/auth/register` 본문입니다.
//!
//! ```json
//! {
//!   "name": "Ana",
//!   "email": "a@x.com",
//!   "password": "p1",
//!   "role": "user"
//! }
//! ```
//!
//! 필드가 빠진 본문도 역직렬화는 성공하도록 `#[serde(default)]`를 사용합니다.
//! 누락 여부는 [`RegisterRequest::missing_required`]가 판단하고,
//! 서비스 계층이 `ValidationError`로 변환합니다.

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::{deserialize_null_as_empty, is_valid_string, normalize_email, trim_string};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios!";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub name: String,

    #[validate(email(message = "Email inválido."))]
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub email: String,

    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub password: String,

    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub role: String,
}

impl RegisterRequest {
    /// 네 필드 중 하나라도 비어 있거나 공백뿐이면 true
    pub fn missing_required(&self) -> bool {
        [&self.name, &self.email, &self.password, &self.role]
            .iter()
            .any(|value| !is_valid_string(value))
    }

    /// 이메일은 소문자로, 이름과 역할은 앞뒤 공백을 제거합니다. 비밀번호는 그대로 둡니다.
    pub fn normalized(self) -> Self {
        Self {
            name: trim_string(&self.name),
            email: normalize_email(&self.email),
            password: self.password,
            role: trim_string(&self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: RegisterRequest = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();

        assert_eq!(request.name, "Ana");
        assert!(request.email.is_empty());
        assert!(request.missing_required());
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ana","email":"a@x.com","password":"p1","role":null}"#,
        )
        .unwrap();

        assert!(request.role.is_empty());
        assert!(request.missing_required());
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let request = RegisterRequest {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
            role: "   ".to_string(),
        };

        assert!(request.missing_required());
    }

    #[test]
    fn test_normalized() {
        let request = RegisterRequest {
            name: "  Ana ".to_string(),
            email: " A@X.com ".to_string(),
            password: " p1 ".to_string(),
            role: "user ".to_string(),
        }
        .normalized();

        assert!(!request.missing_required());
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, " p1 ");
        assert_eq!(request.role, "user");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_format() {
        let request = RegisterRequest {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            password: "p1".to_string(),
            role: "user".to_string(),
        };

        assert!(!request.missing_required());
        assert!(request.validate().is_err());
    }
}
