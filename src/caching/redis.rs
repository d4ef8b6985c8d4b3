//! # Redis 클라이언트 구현
//!
//! 가입 대기 레코드를 Redis에 보관할 때 쓰는 얇은 클라이언트입니다.
//! 값은 `serde_json`으로 직렬화한 문자열로 저장하고, 만료는 `SETEX`로 Redis에 맡깁니다.
//!
//! ## 연결 관리
//!
//! 멀티플렉싱 연결을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 처리합니다.

use redis::{AsyncCommands, Client, Script};
use serde::{Serialize, de::DeserializeOwned};

/// GET, JSON 필드 비교, DEL을 서버에서 한 번에 실행합니다.
/// 결과: `{"missing"}`, `{"mismatch"}`, `{"deleted", <json>}`
const COMPARE_AND_DELETE_SCRIPT: &str = r#"
local value = redis.call('GET', KEYS[1])
if not value then
    return {'missing'}
end
local ok, decoded = pcall(cjson.decode, value)
if not ok or decoded[ARGV[1]] ~= ARGV[2] then
    return {'mismatch'}
end
redis.call('DEL', KEYS[1])
return {'deleted', value}
"#;

const SCAN_BATCH_SIZE: usize = 500;

/// [`RedisClient::compare_and_delete`] 결과
#[derive(Debug, PartialEq)]
pub enum CompareAndDelete<T> {
    /// 필드가 일치하여 삭제됨. 삭제 직전 값을 담습니다.
    Deleted(T),
    /// 값은 있지만 필드가 다름. 키는 그대로 남습니다.
    Mismatch,
    Missing,
}

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 클라이언트를 만들고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    /// JSON 값의 최상위 문자열 `field`가 `expected`와 같을 때만 키를 삭제합니다.
    ///
    /// 비교와 삭제가 Lua 스크립트 하나로 실행되므로, 그 사이에 다른 클라이언트가
    /// 같은 키를 덮어써도 새 값이 지워지지 않습니다.
    pub async fn compare_and_delete<T: DeserializeOwned>(
        &self,
        key: &str,
        field: &str,
        expected: &str,
    ) -> Result<CompareAndDelete<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let reply: Vec<String> = Script::new(COMPARE_AND_DELETE_SCRIPT)
            .key(key)
            .arg(field)
            .arg(expected)
            .invoke_async(&mut conn)
            .await?;

        match reply.as_slice() {
            [status, json] if status == "deleted" => {
                let value = serde_json::from_str(json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(CompareAndDelete::Deleted(value))
            }
            [status] if status == "mismatch" => Ok(CompareAndDelete::Mismatch),
            _ => Ok(CompareAndDelete::Missing),
        }
    }

    /// 패턴에 맞는 키 개수. `SCAN`으로 나눠 읽어 서버를 막지 않습니다.
    ///
    /// 스캔 도중 키가 바뀌면 중복/누락이 있을 수 있어 근사값입니다.
    pub async fn count_keys(&self, pattern: &str) -> Result<usize, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let mut cursor: u64 = 0;
        let mut count = 0;
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await?;

            count += keys.len();
            if next == 0 {
                return Ok(count);
            }
            cursor = next;
        }
    }
}
