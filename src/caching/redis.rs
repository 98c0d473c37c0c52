//! # Redis 캐시 클라이언트
//!
//! 리포지토리 계층의 조회 캐싱에 쓰이는 Redis 래퍼입니다.
//! 값은 전부 JSON 문자열로 직렬화되어 저장되며, 모든 연산은
//! 멀티플렉싱 비동기 연결 위에서 수행됩니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Redis 캐시 클라이언트 래퍼
///
/// JSON 기반의 객체 저장/조회와 TTL 관리를 제공합니다.
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
///
/// // 음료 목록 5분 캐싱
/// redis.set_with_expiry("drinks:all", &drinks, 300).await?;
/// let cached: Option<Vec<Drink>> = redis.get("drinks:all").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

/// serde 실패를 RedisError로 감싸서 호출부 에러 타입을 하나로 유지한다
fn serde_error(context: &'static str, e: impl ToString) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, context, e.to_string()))
}

impl RedisClient {
    /// 새 Redis 클라이언트를 생성하고 PING으로 연결을 확인합니다.
    ///
    /// 주소는 `REDIS_URL` 환경 변수에서 읽으며, 없으면
    /// `redis://localhost:6379`를 사용합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        println!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    /// 키의 값을 조회해 역직렬화합니다.
    ///
    /// 키가 없으면 `Ok(None)`, 저장된 JSON이 `T`로 풀리지 않으면
    /// 에러를 반환합니다.
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| serde_error("Deserialization failed", e))
            })
            .transpose()
    }

    /// 값을 JSON으로 직렬화해 저장합니다. TTL 없음, 기존 키는 덮어씁니다.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let json =
            serde_json::to_string(value).map_err(|e| serde_error("Serialization failed", e))?;
        let mut conn = self.connection().await?;
        conn.set(key, json).await
    }

    /// 만료 시간(초)과 함께 값을 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: usize,
    ) -> Result<(), redis::RedisError> {
        let json =
            serde_json::to_string(value).map_err(|e| serde_error("Serialization failed", e))?;
        let mut conn = self.connection().await?;
        conn.set_ex(key, json, seconds as u64).await
    }

    /// 키를 삭제합니다. 키가 없어도 성공으로 처리됩니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 배치로 삭제합니다. 빈 목록은 Redis 호출 없이 반환합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        conn.del(keys).await
    }

    /// 와일드카드 패턴과 일치하는 키 목록을 반환합니다.
    ///
    /// KEYS는 블로킹 연산이다. 이 서비스의 캐시 키 공간은 작지만,
    /// 키가 많아지면 SCAN으로 바꿔야 한다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 연결 확인 없이 클라이언트만 만듭니다. 실제 구동 경로에서는
    /// `RedisClient::new().await`를 사용하세요.
    fn default() -> Self {
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        let client = Client::open(redis_url)
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
