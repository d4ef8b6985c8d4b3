//! 인증 요청관련 DTO
//!
//! 로그인과 이메일 인증 요청 정보를 매핑합니다.
use serde::Deserialize;
use crate::utils::string_utils::{deserialize_null_as_empty, is_valid_string, normalize_email, trim_string};

pub const CONFIRM_REQUIRED_MESSAGE: &str = "Email e token são obrigatórios.";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Email e senha são obrigatórios.";

/// 로그인 요청 구조체
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub password: String,
}

impl LoginRequest {
    pub fn missing_required(&self) -> bool {
        !is_valid_string(&self.email) || !is_valid_string(&self.password)
    }
}

/// 이메일 인증 요청 구조체
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmEmailRequest {
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub token: String,
}

impl ConfirmEmailRequest {
    pub fn missing_required(&self) -> bool {
        !is_valid_string(&self.email) || !is_valid_string(&self.token)
    }

    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            token: trim_string(&self.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_request_requires_both_fields() {
        let request: ConfirmEmailRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(request.missing_required());

        let request: ConfirmEmailRequest =
            serde_json::from_str(r#"{"email":"a@x.com","token":"AbC123xY"}"#).unwrap();
        assert!(!request.missing_required());
    }

    #[test]
    fn test_confirm_request_normalized_keeps_token_case() {
        let request = ConfirmEmailRequest {
            email: " A@X.COM".to_string(),
            token: " AbC123xY ".to_string(),
        }
        .normalized();

        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.token, "AbC123xY");
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let request: LoginRequest = serde_json::from_str(r#"{"password":"p1"}"#).unwrap();
        assert!(request.missing_required());
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        let login: LoginRequest = serde_json::from_str(r#"{"email":null,"password":"p1"}"#).unwrap();
        assert!(login.missing_required());

        let confirm: ConfirmEmailRequest =
            serde_json::from_str(r#"{"email":"a@x.com","token":null}"#).unwrap();
        assert!(confirm.missing_required());
    }
}
