//! # Drink Menu HTTP Handlers
//!
//! 음료 메뉴 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 필요 권한 | 상태 코드 |
//! |--------|------|-----------|-----------|
//! | `GET` | `/drinks` | 없음 (공개) | 200 OK |
//! | `GET` | `/drinks-detail` | `get:drinks-detail` | 200 OK |
//! | `POST` | `/drinks` | `post:drinks` | 201 Created |
//! | `PATCH` | `/drinks/{id}` | `patch:drinks` | 200 OK |
//! | `DELETE` | `/drinks/{id}` | `delete:drinks` | 200 OK |
//!
//! ## 권한 검사 구조
//!
//! `/drinks` 스코프는 선택적 인증 미들웨어로 감싸져 있습니다. 토큰이
//! 있으면 검증 후 사용자 정보가 Request Extensions에 저장되고, 쓰기
//! 핸들러는 [`AuthenticatedUser`] 추출자와 `require_permission`으로
//! 엔드포인트별 권한을 강제합니다. 토큰 없이 쓰기 엔드포인트에 접근하면
//! 추출자 단계에서 401이 반환됩니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::drinks::request::{CreateDrinkRequest, UpdateDrinkRequest};
use crate::domain::dto::drinks::response::{DeleteDrinkResponse, DrinkListResponse};
use crate::domain::models::auth::authenticated_user::{AuthenticatedUser, OptionalUser};
use crate::services::drinks::drink_service::DrinkService;

/// 공개 메뉴 목록 조회 핸들러
///
/// 인증 없이 접근 가능한 축약 메뉴 목록입니다. 재료 이름은 제외되고
/// 시각화 정보(색상, 비율)만 포함됩니다.
///
/// # 엔드포인트
///
/// `GET /drinks`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "success": true,
///   "drinks": [
///     {
///       "id": "507f1f77bcf86cd799439011",
///       "title": "Latte",
///       "recipe": [{ "color": "#6f4e37", "parts": 1 }]
///     }
///   ]
/// }
/// ```
///
/// ## 등록된 음료 없음 (404 Not Found)
/// ```json
/// { "success": false, "error": 404, "message": "등록된 음료가 없습니다" }
/// ```
#[get("")]
pub async fn get_drinks(user: OptionalUser) -> Result<HttpResponse, AppError> {
    if let OptionalUser(Some(user)) = &user {
        log::debug!("인증된 사용자의 메뉴 조회: {}", user.sub);
    }

    let service = DrinkService::instance();
    let drinks = service.list_drinks().await?;

    Ok(HttpResponse::Ok().json(DrinkListResponse::ok(drinks)))
}

/// 상세 메뉴 목록 조회 핸들러
///
/// 재료 이름을 포함한 전체 레시피 목록입니다. 라우팅 계층에서
/// `get:drinks-detail` 권한을 요구하는 미들웨어로 보호됩니다.
///
/// # 엔드포인트
///
/// `GET /drinks-detail`
#[get("")]
pub async fn get_drinks_detail() -> Result<HttpResponse, AppError> {
    let service = DrinkService::instance();
    let drinks = service.list_drinks_detail().await?;

    Ok(HttpResponse::Ok().json(DrinkListResponse::ok(drinks)))
}

/// 음료 등록 핸들러
///
/// 새 음료를 메뉴에 등록합니다. `post:drinks` 권한이 필요합니다.
///
/// # 엔드포인트
///
/// `POST /drinks`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Latte",
///   "recipe": [
///     { "name": "espresso", "color": "#6f4e37", "parts": 1 },
///     { "name": "milk", "color": "#fffdd0", "parts": 3 }
///   ]
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// 등록된 음료 하나를 담은 목록을 반환합니다.
///
/// ## 실패 사례
///
/// - **400 Bad Request**: 입력 검증 실패 (빈 제목, 빈 레시피, parts < 1)
/// - **401 Unauthorized**: 토큰 없음 또는 검증 실패
/// - **403 Forbidden**: `post:drinks` 권한 없음
/// - **409 Conflict**: 제목 중복
#[post("")]
pub async fn create_drink(
    user: AuthenticatedUser,
    payload: web::Json<CreateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    user.require_permission("post:drinks")?;

    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = DrinkService::instance();
    let created = service.create_drink(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(DrinkListResponse::ok(vec![created])))
}

/// 음료 수정 핸들러
///
/// 기존 음료를 부분 수정합니다. `patch:drinks` 권한이 필요하며,
/// 요청 본문에 포함된 필드만 변경됩니다. 두 필드 모두 생략된 본문은
/// 변경 없이 현재 상태를 반환합니다.
///
/// # 엔드포인트
///
/// `PATCH /drinks/{drink_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// 수정된 음료 하나를 담은 목록을 반환합니다.
///
/// ## 실패 사례
///
/// - **400 Bad Request**: 포함된 필드의 검증 실패
/// - **404 Not Found**: 해당 ID의 음료 없음
/// - **409 Conflict**: 다른 음료가 사용 중인 제목
#[patch("/{drink_id}")]
pub async fn update_drink(
    user: AuthenticatedUser,
    drink_id: web::Path<String>,
    payload: web::Json<UpdateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    user.require_permission("patch:drinks")?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = DrinkService::instance();
    let updated = service
        .update_drink(&drink_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(DrinkListResponse::ok(vec![updated])))
}

/// 음료 삭제 핸들러
///
/// 음료를 메뉴에서 영구 삭제합니다. `delete:drinks` 권한이 필요합니다.
///
/// # 엔드포인트
///
/// `DELETE /drinks/{drink_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "success": true, "delete": "507f1f77bcf86cd799439011" }
/// ```
#[delete("/{drink_id}")]
pub async fn delete_drink(
    user: AuthenticatedUser,
    drink_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    user.require_permission("delete:drinks")?;

    let service = DrinkService::instance();
    let deleted_id = service.delete_drink(&drink_id).await?;

    Ok(HttpResponse::Ok().json(DeleteDrinkResponse::new(deleted_id)))
}
