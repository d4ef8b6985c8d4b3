//! 가입 대기 레코드 저장소

pub mod pending_store;
pub mod memory_pending_store;
pub mod redis_pending_store;

pub use pending_store::{PendingRegistrationStore, TakeOutcome};
pub use memory_pending_store::InMemoryPendingStore;
pub use redis_pending_store::RedisPendingStore;
