//! JWKS 공개키 관리 서비스
//!
//! Auth0 테넌트의 JWKS(JSON Web Key Set) 문서에서 RS256 서명 검증용
//! 공개키를 조회하고 관리하는 서비스입니다.
//!
//! # 특징
//!
//! - kid(Key ID) 기반 공개키 조회
//! - 메모리 내 키 캐싱으로 네트워크 왕복 최소화
//! - 알 수 없는 kid 발견 시 자동 재조회 (키 롤테이션 대응)
//! - 싱글톤 패턴으로 성능 최적화

use crate::config::Auth0Config;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use jsonwebtoken::DecodingKey;
use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// JWKS 문서의 단일 키 항목
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    /// 키 타입 (RSA만 사용)
    pub kty: String,
    /// 키 식별자
    pub kid: String,
    /// 키 용도 ("sig")
    #[serde(rename = "use")]
    pub use_: Option<String>,
    /// RSA modulus (base64url)
    pub n: String,
    /// RSA exponent (base64url)
    pub e: String,
    /// 서명 알고리즘
    pub alg: Option<String>,
}

/// JWKS 문서 루트
#[derive(Debug, Clone, Deserialize)]
pub struct JwksDocument {
    pub keys: Vec<Jwk>,
}

impl JwksDocument {
    /// 서명 검증에 사용 가능한 RSA 키만 골라냅니다.
    pub fn signing_keys(self) -> Vec<Jwk> {
        self.keys
            .into_iter()
            .filter(|key| key.kty == "RSA")
            .filter(|key| key.use_.as_deref().map(|u| u == "sig").unwrap_or(true))
            .collect()
    }
}

/// JWKS 공개키 서비스
///
/// 테넌트 JWKS 엔드포인트에서 공개키를 가져와 kid 기준으로 캐싱하는
/// 싱글톤 서비스입니다.
pub struct JwksService {
    /// JWKS 엔드포인트 호출용 HTTP 클라이언트
    http: reqwest::Client,
    /// kid → 키 캐시
    keys: RwLock<HashMap<String, Jwk>>,
}

/// 싱글톤 인스턴스 저장소
static JWKS_SERVICE_INSTANCE: OnceCell<Arc<JwksService>> = OnceCell::new();

impl JwksService {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 시 HTTP 클라이언트를 생성하고, 이후 호출에서는
    /// 캐시된 인스턴스를 반환합니다. 키 조회는 지연 수행됩니다.
    pub fn instance() -> Arc<Self> {
        JWKS_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    /// 새로운 JWKS 서비스 인스턴스를 생성합니다.
    fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// 주어진 kid에 해당하는 서명 검증 키를 반환합니다.
    ///
    /// 캐시에서 먼저 찾고, 없으면 JWKS 문서를 재조회합니다.
    /// 재조회 후에도 없는 kid는 위조되었거나 폐기된 키로 간주합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 알 수 없는 kid
    /// * `AppError::ExternalServiceError` - JWKS 조회 실패
    pub async fn decoding_key_for(&self, kid: &str) -> AppResult<DecodingKey> {
        if let Some(key) = self.cached_key(kid) {
            return Self::to_decoding_key(&key);
        }

        // 캐시 미스 - 키 롤테이션 가능성이 있으므로 재조회
        self.refresh_keys().await?;

        match self.cached_key(kid) {
            Some(key) => Self::to_decoding_key(&key),
            None => {
                warn!("❌ JWKS에 없는 kid로 서명된 토큰: {}", kid);
                Err(AppError::AuthenticationError(
                    "알 수 없는 서명 키입니다".to_string(),
                ))
            }
        }
    }

    /// JWKS 문서를 다시 가져와 키 캐시를 교체합니다.
    pub async fn refresh_keys(&self) -> AppResult<()> {
        let jwks_url = Auth0Config::jwks_url();

        let document: JwksDocument = self
            .http
            .get(&jwks_url)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 조회 실패: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 응답 오류: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 파싱 실패: {}", e)))?;

        let signing_keys = document.signing_keys();
        info!("✅ JWKS 키 {}개 로드 완료", signing_keys.len());

        let fresh: HashMap<String, Jwk> = signing_keys
            .into_iter()
            .map(|key| (key.kid.clone(), key))
            .collect();

        if let Ok(mut cache) = self.keys.write() {
            *cache = fresh;
        }

        Ok(())
    }

    /// 캐시에서 kid로 키를 조회합니다.
    fn cached_key(&self, kid: &str) -> Option<Jwk> {
        self.keys.read().ok().and_then(|map| map.get(kid).cloned())
    }

    /// JWK의 RSA 구성 요소로 검증 키를 생성합니다.
    fn to_decoding_key(jwk: &Jwk) -> AppResult<DecodingKey> {
        DecodingKey::from_rsa_components(&jwk.n, &jwk.e).context("RSA 공개키 구성 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JWKS: &str = r#"{
        "keys": [
            {
                "kty": "RSA",
                "kid": "key-1",
                "use": "sig",
                "n": "sXchdvW8F1Q",
                "e": "AQAB",
                "alg": "RS256"
            },
            {
                "kty": "EC",
                "kid": "key-2",
                "use": "sig",
                "n": "",
                "e": ""
            },
            {
                "kty": "RSA",
                "kid": "key-3",
                "use": "enc",
                "n": "abc",
                "e": "AQAB"
            }
        ]
    }"#;

    #[test]
    fn test_parse_jwks_document() {
        let document: JwksDocument = serde_json::from_str(SAMPLE_JWKS).unwrap();
        assert_eq!(document.keys.len(), 3);
        assert_eq!(document.keys[0].kid, "key-1");
    }

    #[test]
    fn test_signing_keys_filters_non_rsa_and_non_sig() {
        let document: JwksDocument = serde_json::from_str(SAMPLE_JWKS).unwrap();
        let keys = document.signing_keys();

        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].kid, "key-1");
    }

    #[test]
    fn test_cached_key_miss_returns_none() {
        let service = JwksService::new();
        assert!(service.cached_key("missing").is_none());
    }
}
