//! # Redis 가입 대기 저장소
//!
//! 레코드를 `pending_registration:{email}` 키에 JSON으로 저장하고 만료는 `SETEX`에 맡깁니다.
//! 여러 서버 인스턴스가 같은 대기 상태를 공유해야 할 때 사용합니다.
//!
//! 소비와 롤백은 토큰 비교와 삭제를 한 번에 실행하는 Lua 스크립트
//! ([`RedisClient::compare_and_delete`])로 처리합니다. 비교 직후 재가입으로
//! 레코드가 교체되어도 이전 토큰으로는 새 레코드를 가져갈 수 없습니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    caching::redis::{CompareAndDelete, RedisClient},
    domain::entities::pending::pending_registration::PendingRegistration,
    errors::errors::AppResult,
    repositories::pending::pending_store::{PendingRegistrationStore, TakeOutcome},
};

const KEY_PREFIX: &str = "pending_registration:";
/// 저장된 JSON에서 비교할 필드 이름 (`PendingRegistration::verification_token`)
const TOKEN_FIELD: &str = "verification_token";

pub struct RedisPendingStore {
    redis: Arc<RedisClient>,
}

impl RedisPendingStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn key(email: &str) -> String {
        format!("{}{}", KEY_PREFIX, email)
    }
}

#[async_trait]
impl PendingRegistrationStore for RedisPendingStore {
    async fn put(&self, record: PendingRegistration) -> AppResult<()> {
        // SETEX는 0초를 허용하지 않음
        let ttl = record.remaining_ttl_seconds().max(1);
        self.redis
            .set_with_expiry(&Self::key(&record.email), &record, ttl)
            .await?;
        Ok(())
    }

    async fn get(&self, email: &str) -> AppResult<Option<PendingRegistration>> {
        let record: Option<PendingRegistration> = self.redis.get(&Self::key(email)).await?;
        Ok(record.filter(|record| !record.is_expired()))
    }

    async fn take_if_matches(&self, email: &str, token: &str) -> AppResult<TakeOutcome> {
        let outcome = self.redis
            .compare_and_delete::<PendingRegistration>(&Self::key(email), TOKEN_FIELD, token)
            .await?;

        Ok(match outcome {
            CompareAndDelete::Deleted(record) if !record.is_expired() => TakeOutcome::Taken(record),
            CompareAndDelete::Deleted(_) | CompareAndDelete::Missing => TakeOutcome::Missing,
            CompareAndDelete::Mismatch => TakeOutcome::Mismatch,
        })
    }

    async fn remove_if_token(&self, email: &str, token: &str) -> AppResult<bool> {
        let outcome = self.redis
            .compare_and_delete::<PendingRegistration>(&Self::key(email), TOKEN_FIELD, token)
            .await?;

        Ok(matches!(outcome, CompareAndDelete::Deleted(_)))
    }

    /// Redis가 키 만료를 직접 처리하므로 정리할 것이 없습니다.
    async fn purge_expired(&self) -> AppResult<usize> {
        Ok(0)
    }

    async fn len(&self) -> AppResult<usize> {
        let count = self.redis.count_keys(&format!("{}*", KEY_PREFIX)).await?;
        Ok(count)
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::utils::token_generator::generate_verification_token;

    #[test]
    fn test_key_format() {
        assert_eq!(RedisPendingStore::key("a@x.com"), "pending_registration:a@x.com");
    }

    #[test]
    fn test_token_field_matches_serialized_record() {
        let record = pending("a@x.com", "AbC123xY");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json[TOKEN_FIELD], "AbC123xY");
    }

    // 아래 테스트는 실행 중인 Redis가 필요합니다.
    // REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored

    async fn store() -> RedisPendingStore {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let redis = RedisClient::new(&url).await.expect("Redis 연결 실패");
        RedisPendingStore::new(Arc::new(redis))
    }

    /// 테스트끼리 키가 겹치지 않도록 매번 새 이메일을 씁니다.
    fn unique_email() -> String {
        format!("{}@redis-test.local", generate_verification_token(16).to_lowercase())
    }

    fn pending(email: &str, token: &str) -> PendingRegistration {
        PendingRegistration::new(
            email.to_string(),
            "Ana".to_string(),
            "hash".to_string(),
            "user".to_string(),
            token.to_string(),
            Duration::minutes(5),
        )
    }

    #[actix_web::test]
    #[ignore]
    async fn test_put_overwrites_previous_record() {
        let store = store().await;
        let email = unique_email();
        store.put(pending(&email, "FIRST111")).await.unwrap();
        store.put(pending(&email, "SECOND22")).await.unwrap();

        let record = store.get(&email).await.unwrap().unwrap();
        assert_eq!(record.verification_token, "SECOND22");

        // 교체된 이전 토큰으로는 새 레코드를 가져갈 수 없음
        assert_eq!(store.take_if_matches(&email, "FIRST111").await.unwrap(), TakeOutcome::Mismatch);
        assert!(store.get(&email).await.unwrap().is_some());
        store.remove_if_token(&email, "SECOND22").await.unwrap();
    }

    #[actix_web::test]
    #[ignore]
    async fn test_take_if_matches_consumes_once() {
        let store = store().await;
        let email = unique_email();
        store.put(pending(&email, "AbC123xY")).await.unwrap();

        assert_eq!(store.take_if_matches(&email, "wrong").await.unwrap(), TakeOutcome::Mismatch);
        assert!(store.get(&email).await.unwrap().is_some());

        match store.take_if_matches(&email, "AbC123xY").await.unwrap() {
            TakeOutcome::Taken(record) => assert_eq!(record.email, email),
            other => panic!("expected Taken, got {:?}", other),
        }
        assert_eq!(store.take_if_matches(&email, "AbC123xY").await.unwrap(), TakeOutcome::Missing);
        assert!(store.get(&email).await.unwrap().is_none());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_remove_if_token_ignores_replaced_record() {
        let store = store().await;
        let email = unique_email();
        store.put(pending(&email, "OLDTOKEN")).await.unwrap();
        store.put(pending(&email, "NEWTOKEN")).await.unwrap();

        assert!(!store.remove_if_token(&email, "OLDTOKEN").await.unwrap());
        assert!(store.get(&email).await.unwrap().is_some());
        assert!(store.remove_if_token(&email, "NEWTOKEN").await.unwrap());
        assert!(store.get(&email).await.unwrap().is_none());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_missing_record() {
        let store = store().await;
        let email = unique_email();

        assert!(store.get(&email).await.unwrap().is_none());
        assert_eq!(store.take_if_matches(&email, "AbC123xY").await.unwrap(), TakeOutcome::Missing);
        assert!(!store.remove_if_token(&email, "AbC123xY").await.unwrap());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_len_counts_pending_keys() {
        let store = store().await;
        let email = unique_email();
        store.put(pending(&email, "AbC123xY")).await.unwrap();

        assert!(store.len().await.unwrap() >= 1);
        store.remove_if_token(&email, "AbC123xY").await.unwrap();
    }

    #[actix_web::test]
    #[ignore]
    async fn test_concurrent_takes_return_record_once() {
        let store = Arc::new(store().await);
        let email = unique_email();
        store.put(pending(&email, "AbC123xY")).await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                let email = email.clone();
                actix_web::rt::spawn(async move { store.take_if_matches(&email, "AbC123xY").await })
            })
            .collect();

        let mut taken = 0;
        for handle in handles {
            if let TakeOutcome::Taken(_) = handle.await.unwrap().unwrap() {
                taken += 1;
            }
        }
        assert_eq!(taken, 1);
    }
}
