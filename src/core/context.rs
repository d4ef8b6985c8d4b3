//! # Application Context
//!
//! 설정을 읽어 저장소, 발송기, 서비스를 한 번 생성하고 서로 연결합니다.
//! 만들어진 [`AppContext`]는 `web::Data`로 모든 워커에 공유되며,
//! 애플리케이션 상태를 담는 전역 변수는 없습니다.
//!
//! ## 구성 요소 선택
//!
//! | 구성 요소 | 환경 변수 | 선택지 |
//! |-----------|-----------|--------|
//! | 확정 계정 저장소 | `USER_STORE` | `mongodb` / `memory` |
//! | 가입 대기 저장소 | `PENDING_STORE` | `memory` / `redis` |
//! | 메일 발송 | `EMAIL_PROVIDER` | `brevo` / `memory` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let context = AppContext::from_env().await?;
//! HttpServer::new(move || App::new().app_data(web::Data::new(context.clone())))
//! ```

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    config::{DatabaseConfig, EmailConfig, EmailProvider, PendingStoreBackend, UserStoreBackend, VerificationConfig},
    db::Database,
    errors::errors::{AppResult, ErrorContext},
    repositories::{
        pending::{InMemoryPendingStore, PendingRegistrationStore, RedisPendingStore},
        users::{InMemoryUserStore, UserRepository, UserStore},
    },
    services::{
        auth::TokenService,
        email::{BrevoEmailSender, EmailSender, MemoryEmailSender},
        users::{RegistrationService, RegistrationSettings, UserService},
    },
    utils::display_terminal::print_wiring_summary,
};

#[derive(Clone)]
pub struct AppContext {
    pub user_store: Arc<dyn UserStore>,
    pub pending_store: Arc<dyn PendingRegistrationStore>,
    pub email_sender: Arc<dyn EmailSender>,
    pub token_service: Arc<TokenService>,
    pub registration_service: Arc<RegistrationService>,
    pub user_service: Arc<UserService>,
}

impl AppContext {
    /// 이미 만들어진 구성 요소로 서비스를 조립합니다. 테스트에서 직접 사용합니다.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        pending_store: Arc<dyn PendingRegistrationStore>,
        email_sender: Arc<dyn EmailSender>,
        token_service: Arc<TokenService>,
        settings: RegistrationSettings,
    ) -> Self {
        let registration_service = Arc::new(RegistrationService::new(
            user_store.clone(),
            pending_store.clone(),
            email_sender.clone(),
            settings,
        ));
        let user_service = Arc::new(UserService::new(user_store.clone(), token_service.clone()));

        Self {
            user_store,
            pending_store,
            email_sender,
            token_service,
            registration_service,
            user_service,
        }
    }

    /// 환경 변수 설정대로 외부 저장소에 연결하고 컨텍스트를 만듭니다.
    ///
    /// MongoDB를 사용하는 경우 `users.email` 유니크 인덱스를 이 시점에 생성합니다.
    pub async fn from_env() -> AppResult<Self> {
        let user_store: Arc<dyn UserStore> = match DatabaseConfig::user_store() {
            UserStoreBackend::MongoDb => {
                let database = Database::new(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name())
                    .await
                    .context("MongoDB 연결 실패")?;
                let repository = UserRepository::new(Arc::new(database));
                repository.create_indexes().await?;
                Arc::new(repository)
            }
            UserStoreBackend::Memory => Arc::new(InMemoryUserStore::new()),
        };

        let pending_store: Arc<dyn PendingRegistrationStore> = match VerificationConfig::pending_store() {
            PendingStoreBackend::Redis => {
                let redis = RedisClient::new(&DatabaseConfig::redis_url())
                    .await
                    .context("Redis 연결 실패")?;
                Arc::new(RedisPendingStore::new(Arc::new(redis)))
            }
            PendingStoreBackend::Memory => {
                Arc::new(InMemoryPendingStore::new(VerificationConfig::pending_max_entries()))
            }
        };

        let email_sender: Arc<dyn EmailSender> = match EmailConfig::provider() {
            EmailProvider::Brevo => Arc::new(BrevoEmailSender::from_env()?),
            EmailProvider::Memory => Arc::new(MemoryEmailSender::new()),
        };

        let context = Self::new(
            user_store,
            pending_store,
            email_sender,
            Arc::new(TokenService::from_env()),
            RegistrationSettings::from_env(),
        );
        context.print_summary();

        Ok(context)
    }

    pub fn print_summary(&self) {
        print_wiring_summary(&[
            ("UserStore", self.user_store.backend_name().to_string()),
            ("PendingRegistrationStore", self.pending_store.backend_name().to_string()),
            ("EmailSender", self.email_sender.provider_name().to_string()),
            ("TokenService", "HS256".to_string()),
        ]);
    }
}
