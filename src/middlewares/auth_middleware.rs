//! Auth0 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use crate::domain::models::auth::authentication_request::{AuthMode, RequiredPermission};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

/// Auth0 토큰 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 권한 (선택사항)
    required_permission: Option<RequiredPermission>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_permission: None,
        }
    }

    /// 권한 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_permission(mode: AuthMode, required_permission: RequiredPermission) -> Self {
        Self {
            mode,
            required_permission: Some(required_permission),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 권한 요구 인증 미들웨어 생성
    pub fn required_with_permission(permission: &str) -> Self {
        Self::new_with_permission(AuthMode::Required, RequiredPermission::new(permission))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_permission: self.required_permission.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

    #[test]
    fn test_required_permission_guard() {
        let required = RequiredPermission::new("get:drinks-detail");
        let barista = vec!["get:drinks-detail".to_string(), "post:drinks".to_string()];
        let customer: Vec<String> = vec![];

        assert!(required.is_satisfied(&barista));
        assert!(!required.is_satisfied(&customer));
    }

    #[test]
    fn test_authenticated_user_has_permission() {
        let user = AuthenticatedUser {
            sub: "auth0|manager".to_string(),
            permissions: vec![
                "get:drinks-detail".to_string(),
                "post:drinks".to_string(),
                "patch:drinks".to_string(),
                "delete:drinks".to_string(),
            ],
        };

        assert!(user.has_permission("delete:drinks"));
        assert!(!user.has_permission("admin:everything"));
    }
}
