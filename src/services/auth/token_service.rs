//! Auth0 액세스 토큰 검증 서비스 구현
//!
//! Auth0가 RS256으로 서명한 액세스 토큰의 검증을 담당합니다.
//! 서명 검증에 필요한 공개키는 [`JwksService`]를 통해 조회합니다.

use crate::config::Auth0Config;
use crate::core::errors::AppError;
use crate::domain::models::auth::claims::Auth0Claims;
use crate::services::auth::jwks_service::JwksService;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Auth0 토큰 검증 서비스
///
/// 토큰 헤더의 kid로 서명 키를 찾은 뒤 RS256 서명, issuer, audience,
/// 만료 시각을 모두 검증하고 클레임을 반환합니다.
pub struct Auth0TokenService {
    /// JWKS 공개키 조회 서비스
    jwks: Arc<JwksService>,
}

/// 싱글톤 인스턴스 저장소
static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<Auth0TokenService>> = OnceCell::new();

impl Auth0TokenService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    /// 새로운 토큰 검증 서비스 인스턴스를 생성합니다.
    fn new() -> Self {
        Self {
            jwks: JwksService::instance(),
        }
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(Auth0Claims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 서명/issuer/audience/형식
    /// * `AppError::ExternalServiceError` - JWKS 조회 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = Auth0TokenService::instance();
    /// let claims = token_service.verify_token(token).await?;
    /// println!("User ID: {}", claims.sub);
    /// println!("Permissions: {:?}", claims.permissions);
    /// ```
    pub async fn verify_token(&self, token: &str) -> Result<Auth0Claims, AppError> {
        let header = decode_header(token).map_err(|_| {
            AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string())
        })?;

        let kid = header.kid.ok_or_else(|| {
            AppError::AuthenticationError("토큰 헤더에 kid가 없습니다".to_string())
        })?;

        let decoding_key = self.jwks.decoding_key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[Auth0Config::audience()]);
        validation.set_issuer(&[Auth0Config::issuer()]);

        decode::<Auth0Claims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::AuthenticationError("허용되지 않은 audience입니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::AuthenticationError("허용되지 않은 발급자입니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 유효하지 않습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        let service = Auth0TokenService::instance();

        let token = service.extract_bearer_token("Bearer abc.def.ghi").unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        let service = Auth0TokenService::instance();

        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
        assert!(service.extract_bearer_token("").is_err());
    }

    #[actix_web::test]
    async fn test_verify_token_rejects_malformed_token() {
        let service = Auth0TokenService::instance();

        let result = service.verify_token("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
