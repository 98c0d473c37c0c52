//! # Auth0 Configuration Module
//!
//! 환경 설정 레코드([`EnvironmentConfig`])에서 파생되는 Auth0 테넌트 관련
//! 값들을 제공하는 모듈입니다. 토큰 검증(issuer, audience, JWKS)과
//! 인터랙티브 로그인 URL 구성에 사용됩니다.
//!
//! ## 파생 값 구성
//!
//! | 값 | 형식 |
//! |----|------|
//! | 테넌트 도메인 | `{prefix}.auth0.com` |
//! | Issuer | `https://{domain}/` |
//! | JWKS URL | `https://{domain}/.well-known/jwks.json` |
//! | Authorize URL | `https://{domain}/authorize?audience=...&response_type=token&...` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::Auth0Config;
//!
//! let issuer = Auth0Config::issuer();
//! let jwks_url = Auth0Config::jwks_url();
//! let login_url = Auth0Config::authorize_url();
//! ```

use crate::config::EnvironmentConfig;

/// Auth0 테넌트 설정 접근자
///
/// 모든 값은 전역 환경 설정 레코드에서 파생되며, 레코드와 마찬가지로
/// 프로세스 수명 동안 변하지 않습니다.
pub struct Auth0Config;

impl Auth0Config {
    /// 토큰 issuer 클레임 기대값을 반환합니다.
    ///
    /// Auth0가 발급하는 토큰의 `iss` 클레임은 항상 trailing slash를
    /// 포함합니다: `https://{domain}/`
    pub fn issuer() -> String {
        build_issuer(EnvironmentConfig::get())
    }

    /// 테넌트 JWKS 문서 URL을 반환합니다.
    ///
    /// RS256 서명 검증에 사용할 공개키 집합을 제공하는 엔드포인트입니다.
    pub fn jwks_url() -> String {
        build_jwks_url(EnvironmentConfig::get())
    }

    /// 토큰의 audience 기대값을 반환합니다.
    pub fn audience() -> String {
        EnvironmentConfig::get().auth0_audience.clone()
    }

    /// 인증 완료 후 리디렉션될 콜백 URL을 반환합니다.
    ///
    /// CORS 허용 origin 구성에 사용됩니다.
    pub fn callback_url() -> String {
        EnvironmentConfig::get().auth0_callback_url.clone()
    }

    /// 인터랙티브 로그인을 위한 Auth0 authorize URL을 반환합니다.
    ///
    /// 환경 설정 레코드의 audience, client id, 콜백 URL로 조립되는
    /// implicit flow 로그인 URL입니다.
    pub fn authorize_url() -> String {
        build_authorize_url(EnvironmentConfig::get())
    }
}

/// 설정 레코드에서 테넌트 도메인을 구성합니다.
fn build_domain(config: &EnvironmentConfig) -> String {
    format!("{}.auth0.com", config.auth0_domain_prefix)
}

/// 설정 레코드에서 issuer 기대값을 구성합니다.
fn build_issuer(config: &EnvironmentConfig) -> String {
    format!("https://{}/", build_domain(config))
}

/// 설정 레코드에서 JWKS 문서 URL을 구성합니다.
fn build_jwks_url(config: &EnvironmentConfig) -> String {
    format!("https://{}/.well-known/jwks.json", build_domain(config))
}

/// 설정 레코드에서 authorize URL을 구성합니다.
///
/// audience와 redirect_uri는 쿼리 문자열에 안전하도록 percent-encoding
/// 처리됩니다.
fn build_authorize_url(config: &EnvironmentConfig) -> String {
    format!(
        "https://{}/authorize?audience={}&response_type=token&client_id={}&redirect_uri={}",
        build_domain(config),
        urlencoding::encode(&config.auth0_audience),
        config.auth0_client_id,
        urlencoding::encode(&config.auth0_callback_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn dev_config() -> EnvironmentConfig {
        EnvironmentConfig::defaults(Environment::Development)
    }

    #[test]
    fn test_domain_from_prefix() {
        assert_eq!(build_domain(&dev_config()), "dev-bvzlp059.us.auth0.com");
    }

    #[test]
    fn test_issuer_has_trailing_slash() {
        let issuer = build_issuer(&dev_config());

        assert_eq!(issuer, "https://dev-bvzlp059.us.auth0.com/");
        assert!(issuer.ends_with('/'));
    }

    #[test]
    fn test_jwks_url() {
        assert_eq!(
            build_jwks_url(&dev_config()),
            "https://dev-bvzlp059.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_authorize_url_contains_all_parameters() {
        let url = build_authorize_url(&dev_config());

        assert!(url.starts_with("https://dev-bvzlp059.us.auth0.com/authorize?"));
        assert!(url.contains("audience=drink"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("client_id=qk3LYH12z3nfFNbXWh2KvW7ahSWquSaG"));
        // redirect_uri는 percent-encoding 되어야 한다
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A4200"));
    }
}
