//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 기반 객체 직렬화를 제공합니다.
//! `PENDING_STORE=redis`일 때 가입 대기 레코드 저장소의 백엔드로 사용됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new("redis://localhost:6379").await?;
//! redis.set_with_expiry("pending_registration:a@x.com", &record, 1800).await?;
//! let record: Option<PendingRegistration> = redis.get("pending_registration:a@x.com").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
