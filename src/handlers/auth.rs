//! # Authentication HTTP Handlers
//!
//! 인증 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 토큰 발급 자체는 Auth0가 담당하므로, 이 모듈은 로그인 URL 제공과
//! 검증된 사용자 컨텍스트 조회만 노출합니다.

use actix_web::{HttpResponse, get};

use crate::config::Auth0Config;
use crate::core::errors::AppError;
use crate::domain::dto::drinks::response::LoginUrlResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 로그인 URL 조회 핸들러
///
/// 클라이언트가 인터랙티브 로그인을 시작할 수 있는 Auth0 authorize URL을
/// 반환합니다. 인증이 필요하지 않은 공개 엔드포인트입니다.
///
/// # 엔드포인트
///
/// `GET /auth/login-url`
///
/// # 응답
///
/// ```json
/// {
///   "success": true,
///   "login_url": "https://dev-bvzlp059.us.auth0.com/authorize?audience=drink&..."
/// }
/// ```
#[get("/login-url")]
pub async fn login_url() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(LoginUrlResponse {
        success: true,
        login_url: Auth0Config::authorize_url(),
    }))
}

/// 현재 사용자 조회 핸들러
///
/// 검증된 토큰의 사용자 식별자와 권한 목록을 반환합니다.
/// 필수 인증 미들웨어 뒤에 배치되므로 토큰 없이는 401이 반환됩니다.
///
/// # 엔드포인트
///
/// `GET /auth/me`
///
/// # 응답
///
/// ```json
/// {
///   "sub": "auth0|507f1f77bcf86cd799439011",
///   "permissions": ["get:drinks-detail", "post:drinks"]
/// }
/// ```
#[get("")]
pub async fn current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}
