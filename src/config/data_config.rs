//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 현재 환경을 결정합니다. 기본값은 Production.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// 가입 대기 단계에서 이미 bcrypt 해시로 저장하므로,
/// 가입 요청 처리 시간의 대부분이 이 cost에 의해 결정됩니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 유효하면 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }
}

/// 확정 계정 저장소 백엔드
#[derive(Debug, Clone, PartialEq)]
pub enum UserStoreBackend {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (로컬 개발용)
    Memory,
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "hit_auth_dev".to_string())
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    pub fn user_store() -> UserStoreBackend {
        Self::user_store_from_str(&env::var("USER_STORE").unwrap_or_default())
    }

    pub fn user_store_from_str(s: &str) -> UserStoreBackend {
        match s.to_lowercase().as_str() {
            "memory" => UserStoreBackend::Memory,
            _ => UserStoreBackend::MongoDb,
        }
    }
}
