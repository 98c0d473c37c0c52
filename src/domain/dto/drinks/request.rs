//! 음료 생성/수정 요청 DTO
//!
//! 음료 등록과 부분 수정 엔드포인트의 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::drinks::RecipeIngredient;

/// 레시피 재료 요청 DTO
///
/// 음료 생성/수정 요청 본문에 포함되는 단일 재료입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeIngredientRequest {
    /// 재료 이름 (1-50자)
    #[validate(length(min = 1, max = 50, message = "재료 이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 시각화용 색상 (1-30자)
    #[validate(length(min = 1, max = 30, message = "색상 값을 입력해주세요"))]
    pub color: String,

    /// 비율 단위 (1 이상)
    #[validate(range(min = 1, message = "parts는 1 이상이어야 합니다"))]
    pub parts: i32,
}

impl From<RecipeIngredientRequest> for RecipeIngredient {
    fn from(req: RecipeIngredientRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            parts: req.parts,
        }
    }
}

/// 새로운 음료 등록을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    /// 음료 제목 (1-80자, 컬렉션 내 유일)
    #[validate(length(min = 1, max = 80, message = "제목은 1-80자 사이여야 합니다"))]
    pub title: String,

    /// 레시피 재료 목록 (최소 1개)
    #[validate(length(min = 1, message = "레시피는 최소 1개의 재료가 필요합니다"))]
    #[validate(nested)]
    pub recipe: Vec<RecipeIngredientRequest>,
}

impl CreateDrinkRequest {
    /// 요청 본문을 엔티티 레시피로 변환합니다.
    pub fn into_recipe(self) -> (String, Vec<RecipeIngredient>) {
        let recipe = self.recipe.into_iter().map(Into::into).collect();
        (self.title, recipe)
    }
}

/// 음료 부분 수정을 위한 요청 DTO
///
/// 모든 필드가 선택적이며, 포함된 필드만 수정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    /// 새 제목 (생략 시 유지)
    #[validate(length(min = 1, max = 80, message = "제목은 1-80자 사이여야 합니다"))]
    pub title: Option<String>,

    /// 새 레시피 (생략 시 유지, 포함 시 전체 교체)
    #[validate(length(min = 1, message = "레시피는 최소 1개의 재료가 필요합니다"))]
    #[validate(nested)]
    pub recipe: Option<Vec<RecipeIngredientRequest>>,
}

impl UpdateDrinkRequest {
    /// 수정할 필드가 하나도 없는 요청인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_ingredient() -> RecipeIngredientRequest {
        RecipeIngredientRequest {
            name: "espresso".to_string(),
            color: "#6f4e37".to_string(),
            parts: 1,
        }
    }

    #[test]
    fn test_valid_create_request() {
        let request = CreateDrinkRequest {
            title: "Latte".to_string(),
            recipe: vec![valid_ingredient()],
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let request = CreateDrinkRequest {
            title: "".to_string(),
            recipe: vec![valid_ingredient()],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_recipe_rejected() {
        let request = CreateDrinkRequest {
            title: "Latte".to_string(),
            recipe: vec![],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_parts_rejected() {
        let mut ingredient = valid_ingredient();
        ingredient.parts = 0;

        let request = CreateDrinkRequest {
            title: "Latte".to_string(),
            recipe: vec![ingredient],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let request = UpdateDrinkRequest {
            title: None,
            recipe: None,
        };

        assert!(request.validate().is_ok());
        assert!(request.is_empty());
    }

    #[test]
    fn test_update_request_title_only() {
        let request = UpdateDrinkRequest {
            title: Some("Flat White".to_string()),
            recipe: None,
        };

        assert!(request.validate().is_ok());
        assert!(!request.is_empty());
    }

    #[test]
    fn test_into_recipe_converts_ingredients() {
        let request = CreateDrinkRequest {
            title: "Latte".to_string(),
            recipe: vec![valid_ingredient()],
        };

        let (title, recipe) = request.into_recipe();
        assert_eq!(title, "Latte");
        assert_eq!(recipe.len(), 1);
        assert_eq!(recipe[0].name, "espresso");
        assert_eq!(recipe[0].parts, 1);
    }
}
