//! # 메모리 가입 대기 저장소
//!
//! 프로세스 메모리에 가입 대기 레코드를 보관합니다. 무한히 자라지 않도록
//! 세 가지 방식으로 크기를 제한합니다.
//!
//! - 조회/소비 시점에 만료된 레코드 제거
//! - [`purge_expired`](PendingRegistrationStore::purge_expired)를 주기적으로 호출하는 스윕
//! - 용량(`max_entries`)에 도달하면 가장 오래된 레코드부터 제거

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use crate::{
    domain::entities::pending::pending_registration::PendingRegistration,
    errors::errors::{AppError, AppResult},
    repositories::pending::pending_store::{PendingRegistrationStore, TakeOutcome},
};

pub struct InMemoryPendingStore {
    records: RwLock<HashMap<String, PendingRegistration>>,
    max_entries: usize,
}

impl InMemoryPendingStore {
    /// `max_entries`가 0이면 1로 취급합니다.
    pub fn new(max_entries: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            max_entries: max_entries.max(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("가입 대기 저장소 락이 손상되었습니다".to_string())
}

/// 만료 레코드 제거 후에도 가득 차 있으면 `created_at`이 가장 이른 레코드를 하나씩 제거합니다.
fn make_room(records: &mut HashMap<String, PendingRegistration>, max_entries: usize) {
    let now = Utc::now();
    records.retain(|_, record| !record.is_expired_at(now));

    while records.len() >= max_entries {
        let oldest = records
            .values()
            .min_by_key(|record| record.created_at)
            .map(|record| record.email.clone());

        match oldest {
            Some(email) => {
                warn!("⚠️ 가입 대기 저장소 용량 초과, 가장 오래된 레코드 제거: {}", email);
                records.remove(&email);
            }
            None => break,
        }
    }
}

#[async_trait]
impl PendingRegistrationStore for InMemoryPendingStore {
    async fn put(&self, record: PendingRegistration) -> AppResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;

        if !records.contains_key(&record.email) && records.len() >= self.max_entries {
            make_room(&mut records, self.max_entries);
        }

        records.insert(record.email.clone(), record);
        Ok(())
    }

    async fn get(&self, email: &str) -> AppResult<Option<PendingRegistration>> {
        {
            let records = self.records.read().map_err(|_| poisoned())?;
            match records.get(email) {
                None => return Ok(None),
                Some(record) if !record.is_expired() => return Ok(Some(record.clone())),
                Some(_) => {}
            }
        }

        // 만료된 레코드는 읽는 쪽에서 바로 정리
        let mut records = self.records.write().map_err(|_| poisoned())?;
        if records.get(email).is_some_and(|record| record.is_expired()) {
            records.remove(email);
        }
        Ok(None)
    }

    async fn take_if_matches(&self, email: &str, token: &str) -> AppResult<TakeOutcome> {
        let mut records = self.records.write().map_err(|_| poisoned())?;

        let state = records
            .get(email)
            .map(|record| (record.is_expired(), record.token_matches(token)));

        let outcome = match state {
            None => TakeOutcome::Missing,
            Some((true, _)) => {
                records.remove(email);
                TakeOutcome::Missing
            }
            Some((false, true)) => records
                .remove(email)
                .map(TakeOutcome::Taken)
                .unwrap_or(TakeOutcome::Missing),
            Some((false, false)) => TakeOutcome::Mismatch,
        };

        Ok(outcome)
    }

    async fn remove_if_token(&self, email: &str, token: &str) -> AppResult<bool> {
        let mut records = self.records.write().map_err(|_| poisoned())?;

        if records.get(email).is_some_and(|record| record.token_matches(token)) {
            records.remove(email);
            return Ok(true);
        }
        Ok(false)
    }

    async fn purge_expired(&self) -> AppResult<usize> {
        let mut records = self.records.write().map_err(|_| poisoned())?;

        let before = records.len();
        let now = Utc::now();
        records.retain(|_, record| !record.is_expired_at(now));
        let purged = before - records.len();

        if purged > 0 {
            debug!("🧹 만료된 가입 대기 레코드 {}건 정리", purged);
        }
        Ok(purged)
    }

    async fn len(&self) -> AppResult<usize> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
