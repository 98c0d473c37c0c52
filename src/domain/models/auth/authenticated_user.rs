use crate::core::errors::AppError;
use crate::domain::models::auth::claims::Auth0Claims;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// 검증된 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (토큰 sub 클레임)
    pub sub: String,

    /// 부여된 권한 목록
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(&permission.to_string())
    }

    /// 권한이 없으면 403 에러를 반환하는 가드
    pub fn require_permission(&self, permission: &str) -> Result<(), AppError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(format!(
                "'{}' 권한이 필요합니다",
                permission
            )))
        }
    }
}

impl From<Auth0Claims> for AuthenticatedUser {
    fn from(claims: Auth0Claims) -> Self {
        Self {
            sub: claims.sub,
            permissions: claims.permissions,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::AuthenticationError("인증되지 않은 요청입니다".to_string()).into(),
            )),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(permissions: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "auth0|abc123".to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_has_permission() {
        let user = user_with(&["get:drinks-detail", "post:drinks"]);

        assert!(user.has_permission("post:drinks"));
        assert!(!user.has_permission("delete:drinks"));
    }

    #[test]
    fn test_require_permission_rejects_missing() {
        let user = user_with(&["get:drinks-detail"]);

        assert!(user.require_permission("get:drinks-detail").is_ok());
        assert!(matches!(
            user.require_permission("delete:drinks"),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_from_claims() {
        let claims = Auth0Claims {
            iss: "https://dev-bvzlp059.us.auth0.com/".to_string(),
            sub: "auth0|abc123".to_string(),
            aud: "drink".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
            permissions: vec!["post:drinks".to_string()],
        };

        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.sub, "auth0|abc123");
        assert!(user.has_permission("post:drinks"));
    }
}
