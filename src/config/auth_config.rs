//! # Authentication Configuration Module
//!
//! JWT 토큰, 가입 인증 코드, 인증 메일 발송 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```
//!
//! ### 가입 인증 설정
//! ```bash
//! export VERIFICATION_TOKEN_LENGTH="8"
//! export PENDING_REGISTRATION_TTL_MINUTES="30"
//! export PENDING_REGISTRATION_MAX_ENTRIES="10000"
//! export PENDING_SWEEP_INTERVAL_SECONDS="60"
//! export PENDING_STORE="memory"          # memory | redis
//! ```
//!
//! ### 메일 발송 설정
//! ```bash
//! export EMAIL_PROVIDER="brevo"          # brevo | memory
//! export BREVO_API_KEY="xkeysib-..."
//! export BREVO_SENDER_EMAIL="no-reply@hit.dev"
//! export BREVO_SENDER_NAME="HIT"
//! ```

use std::env;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env_or("JWT_EXPIRATION_HOURS", 24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env_or("JWT_REFRESH_EXPIRATION_DAYS", 7)
    }
}

/// 가입 대기 레코드 저장소 백엔드
#[derive(Debug, Clone, PartialEq)]
pub enum PendingStoreBackend {
    /// 프로세스 메모리. 재시작 시 대기 중인 가입은 사라집니다.
    Memory,
    /// Redis `SETEX` 키. 만료는 Redis가 처리합니다.
    Redis,
}

pub struct VerificationConfig;

impl VerificationConfig {
    pub fn token_length() -> usize {
        env_or("VERIFICATION_TOKEN_LENGTH", 8usize).max(1)
    }

    pub fn pending_ttl_minutes() -> i64 {
        env_or("PENDING_REGISTRATION_TTL_MINUTES", 30i64).max(1)
    }

    pub fn pending_max_entries() -> usize {
        env_or("PENDING_REGISTRATION_MAX_ENTRIES", 10_000usize).max(1)
    }

    pub fn sweep_interval_seconds() -> u64 {
        env_or("PENDING_SWEEP_INTERVAL_SECONDS", 60u64).max(1)
    }

    pub fn pending_store() -> PendingStoreBackend {
        Self::pending_store_from_str(&env::var("PENDING_STORE").unwrap_or_default())
    }

    pub fn pending_store_from_str(s: &str) -> PendingStoreBackend {
        match s.to_lowercase().as_str() {
            "redis" => PendingStoreBackend::Redis,
            _ => PendingStoreBackend::Memory,
        }
    }
}

/// 인증 메일 발송 방식
#[derive(Debug, Clone, PartialEq)]
pub enum EmailProvider {
    /// Brevo 트랜잭션 메일 API
    Brevo,
    /// 메모리 보관 + 로그 출력 (로컬 개발용)
    Memory,
}

pub struct EmailConfig;

impl EmailConfig {
    pub fn provider() -> EmailProvider {
        Self::provider_from_str(&env::var("EMAIL_PROVIDER").unwrap_or_default())
    }

    pub fn provider_from_str(s: &str) -> EmailProvider {
        match s.to_lowercase().as_str() {
            "brevo" => EmailProvider::Brevo,
            _ => EmailProvider::Memory,
        }
    }

    pub fn brevo_api_url() -> String {
        env::var("BREVO_API_URL")
            .unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string())
    }

    pub fn brevo_api_key() -> Option<String> {
        env::var("BREVO_API_KEY").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn sender_email() -> Option<String> {
        env::var("BREVO_SENDER_EMAIL").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn sender_name() -> Option<String> {
        env::var("BREVO_SENDER_NAME").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn verification_subject() -> String {
        env::var("VERIFICATION_EMAIL_SUBJECT")
            .unwrap_or_else(|_| "Codigo de verificação - HIT".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_store_from_string() {
        assert_eq!(VerificationConfig::pending_store_from_str("redis"), PendingStoreBackend::Redis);
        assert_eq!(VerificationConfig::pending_store_from_str("Redis"), PendingStoreBackend::Redis);
        assert_eq!(VerificationConfig::pending_store_from_str("memory"), PendingStoreBackend::Memory);

        // 알 수 없는 값은 메모리 저장소로 처리
        assert_eq!(VerificationConfig::pending_store_from_str("etcd"), PendingStoreBackend::Memory);
    }

    #[test]
    fn test_email_provider_from_string() {
        assert_eq!(EmailConfig::provider_from_str("brevo"), EmailProvider::Brevo);
        assert_eq!(EmailConfig::provider_from_str("BREVO"), EmailProvider::Brevo);
        assert_eq!(EmailConfig::provider_from_str(""), EmailProvider::Memory);
    }

    #[test]
    fn test_verification_defaults() {
        if env::var("VERIFICATION_TOKEN_LENGTH").is_err() {
            assert_eq!(VerificationConfig::token_length(), 8);
        }
        if env::var("PENDING_REGISTRATION_TTL_MINUTES").is_err() {
            assert_eq!(VerificationConfig::pending_ttl_minutes(), 30);
        }
    }
}
