//! 가입 대기 레코드
//!
//! 이메일 인증을 기다리는 가입 요청입니다. 이메일 하나당 최대 하나만 존재하며,
//! 같은 이메일로 다시 가입하면 새 레코드가 이전 레코드(와 토큰)를 덮어씁니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRegistration {
    /// 저장소 키
    pub email: String,
    pub name: String,
    /// 가입 요청 시점에 bcrypt로 해싱된 비밀번호
    pub password_hash: String,
    pub role: String,
    /// 메일로 발송된 인증 코드
    pub verification_token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PendingRegistration {
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        role: String,
        verification_token: String,
        ttl: Duration,
    ) -> Self {
        let created_at = Utc::now();

        Self {
            email,
            name,
            password_hash,
            role,
            verification_token,
            created_at,
            expires_at: created_at + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn token_matches(&self, token: &str) -> bool {
        self.verification_token == token
    }

    /// Redis `SETEX`에 넘길 남은 수명(초). 이미 만료된 경우 0.
    pub fn remaining_ttl_seconds(&self) -> u64 {
        (self.expires_at - Utc::now()).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(ttl: Duration) -> PendingRegistration {
        PendingRegistration::new(
            "a@x.com".to_string(),
            "Ana".to_string(),
            "hash".to_string(),
            "user".to_string(),
            "AbC123xY".to_string(),
            ttl,
        )
    }

    #[test]
    fn test_expiry() {
        let record = pending(Duration::minutes(30));
        assert!(!record.is_expired());
        assert!(record.is_expired_at(record.expires_at));
        assert!(record.is_expired_at(record.created_at + Duration::minutes(31)));
    }

    #[test]
    fn test_token_matches_is_exact() {
        let record = pending(Duration::minutes(30));
        assert!(record.token_matches("AbC123xY"));
        assert!(!record.token_matches("abc123xy"));
        assert!(!record.token_matches(""));
    }

    #[test]
    fn test_remaining_ttl_never_negative() {
        let record = pending(Duration::seconds(-5));
        assert_eq!(record.remaining_ttl_seconds(), 0);

        let record = pending(Duration::minutes(10));
        assert!(record.remaining_ttl_seconds() > 590);
    }
}
