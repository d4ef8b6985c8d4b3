//! Brevo 트랜잭션 메일 발송기
//!
//! `POST {BREVO_API_URL}` 에 JSON 본문을 보내고, 2xx 이외의 응답은 상태 코드와
//! 응답 본문을 담은 `DeliveryError`로 변환합니다.
//!
//! ```bash
//! EMAIL_PROVIDER=brevo
//! BREVO_API_KEY=xkeysib-...
//! BREVO_SENDER_EMAIL=no-reply@hit.com
//! BREVO_SENDER_NAME=HIT
//! ```

use async_trait::async_trait;
use serde::Serialize;
use crate::{
    config::EmailConfig,
    errors::errors::{AppError, AppResult},
    services::email::email_sender::EmailSender,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendEmailBody {
    sender: BrevoEmailAddress,
    to: Vec<BrevoEmailAddress>,
    subject: String,
    text_content: String,
}

pub struct BrevoEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
}

impl BrevoEmailSender {
    pub fn new(api_url: String, api_key: String, sender_email: String, sender_name: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            sender_email,
            sender_name,
        }
    }

    /// API 키와 발신 주소는 필수입니다. 없으면 시작 단계에서 실패합니다.
    pub fn from_env() -> AppResult<Self> {
        let api_key = EmailConfig::brevo_api_key()
            .ok_or_else(|| AppError::InternalError("BREVO_API_KEY가 설정되지 않았습니다".to_string()))?;
        let sender_email = EmailConfig::sender_email()
            .ok_or_else(|| AppError::InternalError("BREVO_SENDER_EMAIL이 설정되지 않았습니다".to_string()))?;

        Ok(Self::new(
            EmailConfig::brevo_api_url(),
            api_key,
            sender_email,
            EmailConfig::sender_name(),
        ))
    }

    fn payload(&self, to: &str, subject: &str, body: &str) -> BrevoSendEmailBody {
        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![BrevoEmailAddress {
                email: to.to_string(),
                name: None,
            }],
            subject: subject.to_string(),
            text_content: body.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for BrevoEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let response = self.client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&self.payload(to, subject, body))
            .send()
            .await
            .map_err(|e| AppError::DeliveryError(format!("Falha ao enviar email: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::DeliveryError(format!(
                "Falha ao enviar email (status={}): {}", status.as_u16(), error_text
            )));
        }

        log::debug!("📧 Brevo 발송 완료: {}", to);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "brevo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let sender = BrevoEmailSender::new(
            "http://localhost/v3/smtp/email".to_string(),
            "key".to_string(),
            "no-reply@hit.com".to_string(),
            Some("HIT".to_string()),
        );

        let json = serde_json::to_value(sender.payload("a@x.com", "assunto", "corpo")).unwrap();
        assert_eq!(json["sender"]["email"], "no-reply@hit.com");
        assert_eq!(json["sender"]["name"], "HIT");
        assert_eq!(json["to"][0]["email"], "a@x.com");
        assert!(json["to"][0].get("name").is_none());
        assert_eq!(json["subject"], "assunto");
        assert_eq!(json["textContent"], "corpo");
    }

    #[actix_web::test]
    async fn test_unreachable_api_is_delivery_error() {
        // 사용되지 않는 포트로 연결 실패 유도
        let sender = BrevoEmailSender::new(
            "http://127.0.0.1:9/v3/smtp/email".to_string(),
            "key".to_string(),
            "no-reply@hit.com".to_string(),
            None,
        );

        let err = sender.send("a@x.com", "assunto", "corpo").await.unwrap_err();
        assert!(matches!(err, AppError::DeliveryError(_)));
    }
}
