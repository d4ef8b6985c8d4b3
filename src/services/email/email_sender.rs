//! 이메일 발송 추상화
//!
//! 가입 흐름은 [`EmailSender`] trait에만 의존하고, 실제 전송 수단은
//! 설정(`EMAIL_PROVIDER`)에 따라 주입됩니다.
//!
//! - [`BrevoEmailSender`](super::brevo_email_sender::BrevoEmailSender): Brevo 트랜잭션 메일 API
//! - [`MemoryEmailSender`]: 발송 대신 메모리 outbox에 기록 (로컬 개발, 테스트)

use std::sync::RwLock;
use async_trait::async_trait;
use crate::errors::errors::{AppError, AppResult};

/// 인증 코드 메일 본문
pub fn verification_email_body(token: &str) -> String {
    format!("Seu código de verificação é :{}", token)
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// 전송 실패는 `AppError::DeliveryError`로 반환합니다.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;

    fn provider_name(&self) -> &'static str;
}

/// 발송된 메시지 한 건
#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// 메모리 outbox 발송기
///
/// 실제로 메일을 보내지 않고 기록만 남깁니다. 개발 서버에서는 로그로 코드를 확인할 수 있습니다.
#[derive(Default)]
pub struct MemoryEmailSender {
    outbox: RwLock<Vec<SentEmail>>,
}

impl MemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 기록된 메시지 사본
    pub fn sent(&self) -> Vec<SentEmail> {
        self.outbox.read().map(|outbox| outbox.clone()).unwrap_or_default()
    }

    pub fn sent_to(&self, to: &str) -> Vec<SentEmail> {
        self.sent().into_iter().filter(|mail| mail.to == to).collect()
    }
}

#[async_trait]
impl EmailSender for MemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        log::info!("📧 [memory] {} <- {}: {}", to, subject, body);

        let mut outbox = self.outbox
            .write()
            .map_err(|_| AppError::DeliveryError("메일 outbox 락이 손상되었습니다".to_string()))?;

        outbox.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
