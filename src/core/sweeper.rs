//! 가입 대기 레코드 주기 정리
//!
//! 아무도 다시 조회하지 않는 만료 레코드도 결국 메모리에서 사라지도록
//! 일정 간격으로 [`PendingRegistrationStore::purge_expired`]를 호출합니다.

use std::sync::Arc;
use std::time::Duration;
use actix_web::rt;
use crate::repositories::pending::PendingRegistrationStore;

/// actix 런타임 위에서 실행되는 정리 작업을 띄웁니다. 서버가 종료되면 함께 멈춥니다.
pub fn spawn_pending_sweep(store: Arc<dyn PendingRegistrationStore>, every: Duration) {
    rt::spawn(async move {
        let mut ticker = rt::time::interval(every);
        // 첫 tick은 즉시 완료됨
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => log::info!("🧹 만료된 가입 대기 레코드 {}건 정리", purged),
                Err(e) => log::error!("❌ 가입 대기 레코드 정리 실패: {}", e),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use crate::{
        domain::entities::pending::PendingRegistration,
        repositories::pending::InMemoryPendingStore,
    };

    #[actix_web::test]
    async fn test_sweep_purges_expired_records() {
        let store = Arc::new(InMemoryPendingStore::new(10));
        store.put(PendingRegistration::new(
            "old@x.com".to_string(),
            "Ana".to_string(),
            "hash".to_string(),
            "user".to_string(),
            "AbC123xY".to_string(),
            ChronoDuration::seconds(-1),
        )).await.unwrap();

        spawn_pending_sweep(store.clone(), Duration::from_millis(10));
        rt::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.len().await.unwrap(), 0);
    }
}
