//! User Entity Implementation
//!
//! 이메일 인증을 마친 확정 계정의 엔티티입니다.
//! 가입 대기 레코드가 인증에 성공했을 때에만 생성됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::pending::pending_registration::PendingRegistration;

/// 확정된 사용자 계정
///
/// MongoDB `users` 컬렉션의 문서 구조와 1:1로 대응합니다.
/// `email` 필드에는 유니크 인덱스가 걸려 있어 같은 이메일로 두 번 확정될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub role: String,
    pub is_email_verified: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 인증이 끝난 가입 대기 레코드로부터 계정을 만듭니다.
    ///
    /// 비밀번호는 가입 단계에서 이미 해싱되어 있으므로 그대로 옮깁니다.
    pub fn from_pending(pending: PendingRegistration) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: pending.name,
            email: pending.email,
            password_hash: pending.password_hash,
            role: pending.role,
            is_email_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
