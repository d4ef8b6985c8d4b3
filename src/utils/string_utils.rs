//! # 문자열 유틸리티
//!
//! 요청 필드 검증과 정규화에 쓰이는 공통 함수들입니다.

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 저장소 키로 쓰이는 이메일 형태. 앞뒤 공백 제거 후 소문자로 변환합니다.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// JSON `null`을 빈 문자열로 받습니다. 요청 DTO의 `#[serde(deserialize_with)]`용입니다.
///
/// `null`로 보낸 필드도 누락된 필드와 같이 `missing_required` 검사에서 걸러집니다.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `validator` 에러에서 사용자에게 보여줄 첫 번째 메시지를 꺼냅니다.
///
/// 필드 이름 순으로 정렬하여 같은 입력에는 항상 같은 메시지가 나오도록 합니다.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field, e)))
        .map(|(field, e)| match &e.message {
            Some(message) => message.to_string(),
            None => format!("{}: {}", field, e.code),
        })
        .next()
        .unwrap_or_else(|| "Dados inválidos.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_deserialize_null_as_empty() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_null_as_empty")]
            role: String,
        }

        let null: Body = serde_json::from_str(r#"{"role": null}"#).unwrap();
        let absent: Body = serde_json::from_str("{}").unwrap();
        let present: Body = serde_json::from_str(r#"{"role": "user"}"#).unwrap();

        assert_eq!(null.role, "");
        assert_eq!(absent.role, "");
        assert_eq!(present.role, "user");
    }

    #[test]
    fn test_validation_message_uses_custom_message() {
        #[derive(Validate)]
        struct Probe {
            #[validate(email(message = "Email inválido."))]
            email: String,
        }

        let errors = Probe { email: "nope".to_string() }.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Email inválido.");
    }
}
