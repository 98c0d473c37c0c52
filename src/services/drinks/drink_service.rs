//! # 음료 관리 서비스 구현
//!
//! 음료 메뉴의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 목록 조회, 등록, 부분 수정, 삭제를 제공하며 핸들러 계층에
//! DTO 기반 인터페이스를 노출합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 DrinkService                   │
//! ├────────────────────────────────────────────────┤
//! │ • 목록 조회 (요약/상세 표현 선택)              │
//! │ • 등록 (제목 중복 검증)                        │
//! │ • 부분 수정 ($set 문서 조립)                   │
//! │ • 삭제 (존재 확인 후 삭제)                     │
//! └────────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌────────────────────────────────────────────────┐
//! │               DrinkRepository                  │
//! │ • MongoDB CRUD + Redis 캐싱                    │
//! └────────────────────────────────────────────────┘
//! ```

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::drinks::request::{CreateDrinkRequest, UpdateDrinkRequest};
use crate::domain::dto::drinks::response::{DrinkDetailResponse, DrinkShortResponse};
use crate::domain::entities::drinks::drink::{Drink, RecipeIngredient};
use crate::repositories::drinks::drink_repo::DrinkRepository;
use mongodb::bson::{DateTime, doc, to_bson};
use singleton_macro::service;
use std::sync::Arc;

/// 음료 관리 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며, 리포지토리가
/// 자동 주입됩니다.
#[service(name = "drink")]
pub struct DrinkService {
    /// 음료 데이터 액세스 리포지토리
    drink_repo: Arc<DrinkRepository>,
}

impl DrinkService {
    /// 공개 메뉴 목록 조회 (요약 표현)
    ///
    /// 재료 이름이 제외된 축약 레시피로 전체 음료를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 등록된 음료가 하나도 없는 경우
    pub async fn list_drinks(&self) -> AppResult<Vec<DrinkShortResponse>> {
        let drinks = self.non_empty_list().await?;
        Ok(drinks.iter().map(DrinkShortResponse::from).collect())
    }

    /// 상세 메뉴 목록 조회 (전체 레시피 포함)
    ///
    /// 재료 이름을 포함한 전체 레시피로 모든 음료를 반환합니다.
    /// 상세 조회 권한 검증은 핸들러/미들웨어 계층에서 수행됩니다.
    pub async fn list_drinks_detail(&self) -> AppResult<Vec<DrinkDetailResponse>> {
        let drinks = self.non_empty_list().await?;
        Ok(drinks.iter().map(DrinkDetailResponse::from).collect())
    }

    /// 새 음료 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 제목 중복
    pub async fn create_drink(
        &self,
        request: CreateDrinkRequest,
    ) -> AppResult<DrinkDetailResponse> {
        let (title, recipe) = request.into_recipe();
        let drink = Drink::new(title, recipe);

        let created = self.drink_repo.create(drink).await?;
        log::info!("📦 새 음료 등록: {}", created.title);

        Ok(DrinkDetailResponse::from(&created))
    }

    /// 음료 부분 수정
    ///
    /// 요청에 포함된 필드만 수정하며, 제목 변경 시 중복 여부를 확인합니다.
    /// 두 필드 모두 생략된 본문은 변경 없이 현재 상태를 200으로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 다른 음료가 이미 사용 중인 제목
    /// * `AppError::NotFound` - 해당 ID의 음료 없음
    pub async fn update_drink(
        &self,
        id: &str,
        request: UpdateDrinkRequest,
    ) -> AppResult<DrinkDetailResponse> {
        if request.is_empty() {
            // 수정할 필드가 없으면 조회로 처리
            let drink = self
                .drink_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("음료를 찾을 수 없습니다".to_string()))?;

            return Ok(DrinkDetailResponse::from(&drink));
        }

        if let Some(title) = &request.title {
            // 다른 문서가 같은 제목을 쓰고 있으면 거부
            if let Some(existing) = self.drink_repo.find_by_title(title).await? {
                if existing.id_string().as_deref() != Some(id) {
                    return Err(AppError::ConflictError(
                        "이미 등록된 음료 제목입니다".to_string(),
                    ));
                }
            }
        }

        let update_doc = Self::build_update_document(&request)?;

        let updated = self
            .drink_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("음료를 찾을 수 없습니다".to_string()))?;

        log::info!("✏️ 음료 수정 완료: {}", updated.title);

        Ok(DrinkDetailResponse::from(&updated))
    }

    /// 요청에 포함된 필드만으로 `$set` 문서를 조립합니다.
    fn build_update_document(request: &UpdateDrinkRequest) -> AppResult<mongodb::bson::Document> {
        let mut update_doc = doc! { "updated_at": DateTime::now() };

        if let Some(title) = &request.title {
            update_doc.insert("title", title.clone());
        }

        if let Some(recipe) = &request.recipe {
            let recipe: Vec<RecipeIngredient> = recipe.iter().cloned().map(Into::into).collect();
            let recipe_bson = to_bson(&recipe)
                .map_err(|e| AppError::InternalError(format!("레시피 직렬화 실패: {}", e)))?;
            update_doc.insert("recipe", recipe_bson);
        }

        Ok(update_doc)
    }

    /// 음료 삭제
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 삭제된 음료의 ID
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 음료 없음
    pub async fn delete_drink(&self, id: &str) -> AppResult<String> {
        let deleted = self.drink_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("음료를 찾을 수 없습니다".to_string()));
        }

        log::info!("🗑️ 음료 삭제 완료: {}", id);
        Ok(id.to_string())
    }

    /// 목록을 조회하고 비어 있으면 404를 반환합니다.
    async fn non_empty_list(&self) -> AppResult<Vec<Drink>> {
        let drinks = self.drink_repo.find_all().await?;

        if drinks.is_empty() {
            return Err(AppError::NotFound("등록된 음료가 없습니다".to_string()));
        }

        Ok(drinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::drinks::request::RecipeIngredientRequest;
    use mongodb::bson::Bson;

    #[test]
    fn test_build_update_document_title_only() {
        let request = UpdateDrinkRequest {
            title: Some("Flat White".to_string()),
            recipe: None,
        };

        let update_doc = DrinkService::build_update_document(&request).unwrap();

        assert_eq!(update_doc.get_str("title").unwrap(), "Flat White");
        assert!(update_doc.contains_key("updated_at"));
        assert!(!update_doc.contains_key("recipe"));
    }

    #[test]
    fn test_build_update_document_recipe_becomes_array() {
        let request = UpdateDrinkRequest {
            title: None,
            recipe: Some(vec![RecipeIngredientRequest {
                name: "espresso".to_string(),
                color: "#6f4e37".to_string(),
                parts: 2,
            }]),
        };

        let update_doc = DrinkService::build_update_document(&request).unwrap();

        assert!(!update_doc.contains_key("title"));
        match update_doc.get("recipe") {
            Some(Bson::Array(items)) => assert_eq!(items.len(), 1),
            other => panic!("recipe가 배열이 아님: {:?}", other),
        }
    }

    #[test]
    fn test_empty_update_request_is_treated_as_noop() {
        // 두 필드 모두 없는 본문은 에러가 아니라 현재 상태 조회로 이어진다
        let request = UpdateDrinkRequest {
            title: None,
            recipe: None,
        };

        assert!(request.is_empty());

        let update_doc = DrinkService::build_update_document(&request).unwrap();
        assert_eq!(update_doc.keys().count(), 1);
        assert!(update_doc.contains_key("updated_at"));
    }
}
