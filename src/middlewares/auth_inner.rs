//! AuthMiddleware가 요청마다 수행하는 검증 본체
use crate::core::AppError;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::{AuthMode, RequiredPermission};
use crate::services::auth::Auth0TokenService;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_permission: Option<RequiredPermission>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_permission = self.required_permission.clone();

        Box::pin(async move {
            let token_service = Auth0TokenService::instance();

            let auth_result = extract_user_from_request(&req, &token_service).await;

            match (&mode, auth_result) {
                // 필수 인증인데 토큰 검증에 실패한 경우
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "success": false,
                        "error": 401,
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // 필수 인증 통과, 권한까지 확인
                (AuthMode::Required, Ok(user)) => {
                    // 권한 검증
                    if let Some(ref required) = required_permission {
                        if !required.is_satisfied(&user.permissions) {
                            log::warn!(
                                "권한 부족: 사용자 {} ({:?}), 필요 권한: {:?}",
                                user.sub,
                                user.permissions,
                                required
                            );
                            let response = HttpResponse::Forbidden().json(serde_json::json!({
                                "success": false,
                                "error": 403,
                                "message": "접근 권한이 부족합니다"
                            }));
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response).map_into_right_body();
                            return Ok(res);
                        }
                    }

                    // 핸들러의 추출자가 읽을 수 있게 저장
                    req.extensions_mut().insert(user.clone());
                    log::debug!("인증 성공: 사용자 {}", user.sub);
                }
                // 선택적 인증에서 유효한 토큰이 온 경우
                (AuthMode::Optional, Ok(user)) => {
                    req.extensions_mut().insert(user.clone());
                    log::debug!("선택적 인증 성공: 사용자 {}", user.sub);
                }
                // 선택적 인증은 실패해도 익명으로 통과
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증 실패, 익명으로 진행: {}", err);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출하고 검증
async fn extract_user_from_request(
    req: &ServiceRequest,
    token_service: &Auth0TokenService,
) -> actix_web::Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = token_service.extract_bearer_token(auth_header)?;

    let claims = token_service.verify_token(token).await?;

    Ok(AuthenticatedUser::from(claims))
}

#[cfg(test)]
mod tests {
    use crate::core::errors::AppError;

    #[test]
    fn test_optional_auth_failure_reason_is_specific() {
        // 선택적 인증이 익명으로 통과할 때 기록하는 사유가
        // 헤더 누락과 토큰 검증 실패를 구분하는지 확인
        let missing_header =
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string());
        let invalid_token =
            AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());

        assert_ne!(missing_header.to_string(), invalid_token.to_string());
        assert!(missing_header.to_string().contains("헤더가 없습니다"));
        assert!(invalid_token.to_string().contains("유효하지 않은 토큰"));
    }
}
