//! 이메일 발송 서비스 모듈
//!
//! 인증 코드 메일을 보내는 발송기들을 제공합니다.

pub mod email_sender;
pub mod brevo_email_sender;

pub use email_sender::{verification_email_body, EmailSender, MemoryEmailSender, SentEmail};
pub use brevo_email_sender::BrevoEmailSender;
