//! # 사용자 리포지토리 구현
//!
//! 확정 계정의 데이터 액세스 계층입니다. 서비스 계층은 [`UserStore`] trait만 알고,
//! 실제 저장소는 MongoDB([`UserRepository`]) 또는 메모리
//! ([`InMemoryUserStore`](super::memory_user_store::InMemoryUserStore))가 주입됩니다.
//!
//! ## 특징
//!
//! - **이메일 유니크 인덱스**: 동시에 두 요청이 같은 이메일을 확정하려 해도 한 건만 저장
//! - **중복 키 변환**: MongoDB 11000 에러를 `DuplicateEmailError`로 변환

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, error::{ErrorKind, WriteFailure}, options::IndexOptions, Collection, IndexModel};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "email já cadastrado.";

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 확정 계정 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 계정을 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 계정을 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// 같은 이메일의 계정이 이미 있으면 `AppError::DuplicateEmailError`.
    async fn insert(&self, user: User) -> AppResult<User>;

    fn backend_name(&self) -> &'static str;
}

/// MongoDB `users` 컬렉션 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 시작 시 한 번 호출합니다. 이메일 유니크 인덱스가 중복 확정을 막는 마지막 방어선입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection()
            .find_one(doc! { "email": email })
            .await?;

        Ok(user)
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::DuplicateEmailError(DUPLICATE_EMAIL_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
