//! 메모리 기반 확정 계정 저장소
//!
//! `USER_STORE=memory`로 MongoDB 없이 서버를 띄울 때와 테스트에서 사용합니다.
//! 중복 검사와 삽입이 하나의 쓰기 락 안에서 일어나므로 같은 이메일은 한 번만 저장됩니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
    repositories::users::user_repo::{UserStore, DUPLICATE_EMAIL_MESSAGE},
};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("사용자 저장소 락이 손상되었습니다".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(|_| poisoned())?;

        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateEmailError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.insert(user.email.clone(), user.clone());

        Ok(user)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
