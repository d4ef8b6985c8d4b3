//! 확정 계정 저장소

pub mod user_repo;
pub mod memory_user_store;

pub use user_repo::{UserRepository, UserStore};
pub use memory_user_store::InMemoryUserStore;
