//! # 가입 대기 저장소 trait
//!
//! 이메일을 키로 가입 대기 레코드를 보관합니다. 레코드 소비는 항상
//! "비교 후 삭제"([`PendingRegistrationStore::take_if_matches`])로 이루어지므로,
//! 같은 토큰으로 동시에 들어온 확인 요청 중 정확히 하나만 레코드를 가져갑니다.

use async_trait::async_trait;
use crate::{
    domain::entities::pending::pending_registration::PendingRegistration,
    errors::errors::AppResult,
};

/// `take_if_matches` 결과
#[derive(Debug, Clone, PartialEq)]
pub enum TakeOutcome {
    /// 토큰이 일치하여 레코드를 꺼냈습니다. 저장소에서는 이미 삭제된 상태입니다.
    Taken(PendingRegistration),
    /// 레코드는 있지만 토큰이 다릅니다. 레코드는 그대로 남습니다.
    Mismatch,
    /// 레코드가 없거나 만료되었습니다.
    Missing,
}

#[async_trait]
pub trait PendingRegistrationStore: Send + Sync {
    /// 같은 이메일의 기존 레코드는 덮어씁니다.
    async fn put(&self, record: PendingRegistration) -> AppResult<()>;

    /// 만료되지 않은 레코드만 반환합니다.
    async fn get(&self, email: &str) -> AppResult<Option<PendingRegistration>>;

    async fn take_if_matches(&self, email: &str, token: &str) -> AppResult<TakeOutcome>;

    /// 저장된 토큰이 여전히 `token`일 때만 삭제합니다.
    ///
    /// 메일 발송 실패 시 되돌리기용입니다. 그 사이 재가입으로 레코드가 교체되었다면 건드리지 않습니다.
    async fn remove_if_token(&self, email: &str, token: &str) -> AppResult<bool>;

    /// 만료 레코드를 정리하고 삭제한 개수를 반환합니다.
    async fn purge_expired(&self) -> AppResult<usize>;

    async fn len(&self) -> AppResult<usize>;

    fn backend_name(&self) -> &'static str;
}
