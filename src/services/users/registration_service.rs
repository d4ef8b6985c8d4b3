//! # 가입/이메일 인증 서비스
//!
//! 계정은 두 단계를 거쳐 만들어집니다.
//!
//! ```text
//!  register ──► PENDING ──confirm_email──► CONFIRMED (users 컬렉션)
//!     ▲            │
//!     └─재가입(토큰 교체)    └── TTL 만료 ──► NONE
//! ```
//!
//! 1. **register**: 입력 검증 → 중복 확인 → 비밀번호 해싱 → 가입 대기 레코드 저장 → 인증 코드 발송
//! 2. **confirm_email**: 대기 레코드를 토큰과 비교 후 삭제 → 확정 계정 저장
//!
//! 레코드 소비는 저장소의 비교 후 삭제 연산 한 번으로 이루어지므로
//! 발급된 토큰 하나로는 한 번만 인증할 수 있습니다.

use std::sync::Arc;
use bcrypt::hash;
use chrono::Duration;
use log::{error, info, warn};
use validator::Validate;
use crate::{
    config::{EmailConfig, PasswordConfig, VerificationConfig},
    domain::{
        dto::users::{
            request::{
                auth_request::CONFIRM_REQUIRED_MESSAGE,
                register_request::REQUIRED_FIELDS_MESSAGE,
                ConfirmEmailRequest, RegisterRequest,
            },
            response::{ConfirmEmailResponse, MessageResponse, UserResponse},
        },
        entities::{pending::PendingRegistration, users::User},
    },
    errors::errors::{AppError, AppResult},
    repositories::{
        pending::{PendingRegistrationStore, TakeOutcome},
        users::{user_repo::DUPLICATE_EMAIL_MESSAGE, UserStore},
    },
    services::email::{verification_email_body, EmailSender},
    utils::{string_utils::validation_message, token_generator::generate_verification_token},
};

pub const TOKEN_SENT_MESSAGE: &str = "Token enviado por email.";
pub const EMAIL_VERIFIED_MESSAGE: &str = "Email verificado com sucesso.";
pub const INVALID_TOKEN_MESSAGE: &str = "Token inválido.";
pub const NO_PENDING_REGISTRATION_MESSAGE: &str = "Nenhum cadastro pendente para este email.";

/// 가입 흐름 설정값
#[derive(Debug, Clone)]
pub struct RegistrationSettings {
    pub token_length: usize,
    pub pending_ttl: Duration,
    pub bcrypt_cost: u32,
    pub email_subject: String,
}

impl RegistrationSettings {
    pub fn from_env() -> Self {
        Self {
            token_length: VerificationConfig::token_length(),
            pending_ttl: Duration::minutes(VerificationConfig::pending_ttl_minutes()),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            email_subject: EmailConfig::verification_subject(),
        }
    }
}

pub struct RegistrationService {
    user_store: Arc<dyn UserStore>,
    pending_store: Arc<dyn PendingRegistrationStore>,
    email_sender: Arc<dyn EmailSender>,
    settings: RegistrationSettings,
}

impl RegistrationService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        pending_store: Arc<dyn PendingRegistrationStore>,
        email_sender: Arc<dyn EmailSender>,
        settings: RegistrationSettings,
    ) -> Self {
        Self {
            user_store,
            pending_store,
            email_sender,
            settings,
        }
    }

    /// 가입 요청을 받아 인증 코드를 메일로 보냅니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필드 누락/공백, 잘못된 이메일 형식
    /// * `DuplicateEmailError` - 이미 확정된 이메일 (대기 레코드는 건드리지 않음)
    /// * `DeliveryError` - 메일 발송 실패 (이번 요청이 저장한 대기 레코드는 되돌림)
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        let request = request.normalized();

        let result = self.register_pending(request.clone()).await;
        if let Err(e) = &result {
            warn!("⚠️ 가입 요청 실패 ({}): {}", request.email, e);
        }
        result
    }

    async fn register_pending(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        if request.missing_required() {
            return Err(AppError::ValidationError(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        request.validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        if self.user_store.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateEmailError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let token = generate_verification_token(self.settings.token_length);

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.settings.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let record = PendingRegistration::new(
            request.email.clone(),
            request.name,
            password_hash,
            request.role,
            token.clone(),
            self.settings.pending_ttl,
        );
        self.pending_store.put(record).await?;

        let body = verification_email_body(&token);
        if let Err(e) = self.email_sender
            .send(&request.email, &self.settings.email_subject, &body)
            .await
        {
            error!("❌ 인증 메일 발송 실패 ({}): {}", request.email, e);
            // 그 사이 재가입으로 교체된 레코드는 남겨둠
            if let Err(rollback_err) = self.pending_store.remove_if_token(&request.email, &token).await {
                error!("❌ 가입 대기 레코드 롤백 실패 ({}): {}", request.email, rollback_err);
            }
            return Err(e);
        }

        info!("📨 인증 코드 발송: {}", request.email);
        Ok(MessageResponse::new(TOKEN_SENT_MESSAGE))
    }

    /// 인증 코드를 확인하고 확정 계정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이메일 또는 토큰 누락
    /// * `VerificationError` - 대기 레코드 없음/만료, 토큰 불일치 (레코드는 유지)
    /// * `DuplicateEmailError` - 동시에 다른 요청이 먼저 확정한 경우
    pub async fn confirm_email(&self, request: ConfirmEmailRequest) -> AppResult<ConfirmEmailResponse> {
        let request = request.normalized();

        if request.missing_required() {
            return Err(AppError::ValidationError(CONFIRM_REQUIRED_MESSAGE.to_string()));
        }

        let record = match self.pending_store.take_if_matches(&request.email, &request.token).await? {
            TakeOutcome::Taken(record) => record,
            TakeOutcome::Mismatch => {
                warn!("⚠️ 인증 코드 불일치: {}", request.email);
                return Err(AppError::VerificationError(INVALID_TOKEN_MESSAGE.to_string()));
            }
            TakeOutcome::Missing => {
                warn!("⚠️ 가입 대기 레코드 없음: {}", request.email);
                return Err(AppError::VerificationError(NO_PENDING_REGISTRATION_MESSAGE.to_string()));
            }
        };

        let user = match self.user_store.insert(User::from_pending(record.clone())).await {
            Ok(user) => user,
            Err(e @ AppError::DuplicateEmailError(_)) => return Err(e),
            Err(e) => {
                // 저장소 장애로 계정을 만들지 못하면 같은 코드로 다시 시도할 수 있도록 되돌림
                error!("❌ 계정 저장 실패 ({}): {}", request.email, e);
                if let Err(restore_err) = self.pending_store.put(record).await {
                    error!("❌ 가입 대기 레코드 복구 실패 ({}): {}", request.email, restore_err);
                }
                return Err(e);
            }
        };

        info!("✅ 이메일 인증 완료: {}", user.email);

        Ok(ConfirmEmailResponse {
            message: EMAIL_VERIFIED_MESSAGE.to_string(),
            user: UserResponse::from(user),
        })
    }
}
