//! 실행 환경 및 환경 설정 레코드
//!
//! 실행 환경 감지, 서버 바인딩 설정, 그리고 프론트엔드/백엔드가 공유하는
//! 환경 설정 레코드([`EnvironmentConfig`])를 관리합니다.

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT") {
            Ok(value) => Self::from_str(&value),
            Err(_) => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다 (안전한 기본값).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경 여부를 반환합니다.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
///
/// 기본적으로 `127.0.0.1:5000`에 바인딩합니다.
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트를 반환합니다. (기본값: `127.0.0.1`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다. (기본값: `5000`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    /// `host:port` 형식의 바인드 주소를 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 환경 설정 레코드
///
/// 프론트엔드 빌드와 백엔드 구동이 공유하는 환경별 상수 집합입니다.
/// 프로세스 시작 시 한 번 구성되며 이후 절대 변경되지 않습니다.
/// 불변이므로 동시 접근에 동기화가 필요 없습니다.
///
/// ## 필드 구성
///
/// | 필드 | 의미 |
/// |------|------|
/// | `production` | 프로덕션 배포 대상 여부 |
/// | `api_server_url` | 백엔드 API 기본 주소 |
/// | `auth0_domain_prefix` | Auth0 테넌트 서브도메인 |
/// | `auth0_audience` | Auth0 API audience 식별자 |
/// | `auth0_client_id` | Auth0 애플리케이션 client id |
/// | `auth0_callback_url` | 인증 완료 후 리디렉션 주소 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// 프로덕션 배포 대상 여부
    pub production: bool,
    /// 백엔드 API 서버 기본 주소
    pub api_server_url: String,
    /// Auth0 테넌트 도메인 prefix (예: `dev-bvzlp059.us`)
    pub auth0_domain_prefix: String,
    /// Auth0 API audience 식별자
    pub auth0_audience: String,
    /// Auth0 애플리케이션 client id
    pub auth0_client_id: String,
    /// 인증 완료 후 리디렉션될 프론트엔드 주소
    pub auth0_callback_url: String,
}

/// 전역 환경 설정 레코드 인스턴스
///
/// 첫 접근 시 현재 실행 환경 기준으로 한 번만 구성됩니다.
static ENVIRONMENT_CONFIG: Lazy<EnvironmentConfig> =
    Lazy::new(|| EnvironmentConfig::load(Environment::current()));

impl EnvironmentConfig {
    /// 프로세스 전역의 환경 설정 레코드를 반환합니다.
    ///
    /// 레코드는 첫 호출 시점에 한 번 구성되며, 이후 모든 호출은
    /// 동일한 불변 인스턴스를 반환합니다.
    pub fn get() -> &'static EnvironmentConfig {
        &ENVIRONMENT_CONFIG
    }

    /// 주어진 실행 환경의 리터럴 기본값 레코드를 반환합니다.
    ///
    /// 개발 기본값은 개발용 Auth0 테넌트와 로컬 서버 주소를 가리키는
    /// 고정 리터럴입니다.
    pub fn defaults(environment: Environment) -> Self {
        Self {
            production: environment.is_production(),
            api_server_url: "http://127.0.0.1:5000".to_string(),
            auth0_domain_prefix: "dev-bvzlp059.us".to_string(),
            auth0_audience: "drink".to_string(),
            auth0_client_id: "qk3LYH12z3nfFNbXWh2KvW7ahSWquSaG".to_string(),
            auth0_callback_url: "http://127.0.0.1:4200".to_string(),
        }
    }

    /// 환경 변수를 기본값 위에 덮어써서 레코드를 구성합니다.
    ///
    /// 프로덕션 환경에서 하나라도 기본값으로 남아 있으면 경고 로그를
    /// 출력합니다 (개발용 Auth0 테넌트로 구동되는 상황 감지).
    pub fn load(environment: Environment) -> Self {
        let defaults = Self::defaults(environment);

        let config = Self {
            production: environment.is_production(),
            api_server_url: env::var("API_SERVER_URL").unwrap_or(defaults.api_server_url),
            auth0_domain_prefix: env::var("AUTH0_DOMAIN_PREFIX")
                .unwrap_or(defaults.auth0_domain_prefix),
            auth0_audience: env::var("AUTH0_AUDIENCE").unwrap_or(defaults.auth0_audience),
            auth0_client_id: env::var("AUTH0_CLIENT_ID").unwrap_or(defaults.auth0_client_id),
            auth0_callback_url: env::var("AUTH0_CALLBACK_URL")
                .unwrap_or(defaults.auth0_callback_url),
        };

        if environment.is_production() && config.auth0_domain_prefix == "dev-bvzlp059.us" {
            warn!("AUTH0_DOMAIN_PREFIX not set, using development tenant (not secure for production!)");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);

        // 대소문자 무관
        assert_eq!(Environment::from_str("DEV"), Environment::Development);

        // 알 수 없는 값은 안전한 기본값으로
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_development_defaults_match_environment_literals() {
        // 개발 환경 레코드는 정해진 리터럴과 필드 단위로 일치해야 한다
        let config = EnvironmentConfig::defaults(Environment::Development);

        assert_eq!(config.production, false);
        assert_eq!(config.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(config.auth0_domain_prefix, "dev-bvzlp059.us");
        assert_eq!(config.auth0_audience, "drink");
        assert_eq!(config.auth0_client_id, "qk3LYH12z3nfFNbXWh2KvW7ahSWquSaG");
        assert_eq!(config.auth0_callback_url, "http://127.0.0.1:4200");
    }

    #[test]
    fn test_production_flag_follows_environment() {
        assert!(EnvironmentConfig::defaults(Environment::Production).production);
        assert!(!EnvironmentConfig::defaults(Environment::Development).production);
        assert!(!EnvironmentConfig::defaults(Environment::Test).production);
    }

    #[test]
    fn test_no_field_is_empty() {
        let config = EnvironmentConfig::defaults(Environment::Development);

        assert!(!config.api_server_url.is_empty());
        assert!(!config.auth0_domain_prefix.is_empty());
        assert!(!config.auth0_audience.is_empty());
        assert!(!config.auth0_client_id.is_empty());
        assert!(!config.auth0_callback_url.is_empty());
    }

    #[test]
    fn test_url_fields_are_http_urls() {
        let config = EnvironmentConfig::defaults(Environment::Development);

        assert!(config.api_server_url.starts_with("http"));
        assert!(config.auth0_callback_url.starts_with("http"));
    }

    #[test]
    fn test_global_record_is_constructed_once() {
        // 두 번 조회해도 동일한 인스턴스를 가리켜야 한다
        let first = EnvironmentConfig::get() as *const EnvironmentConfig;
        let second = EnvironmentConfig::get() as *const EnvironmentConfig;

        assert_eq!(first, second);
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let config = EnvironmentConfig::defaults(Environment::Development);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EnvironmentConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
