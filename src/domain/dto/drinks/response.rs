//! 음료 API 응답 DTO
//!
//! 목록/상세/삭제 엔드포인트의 응답 형식을 정의합니다.
//! 목록 응답은 항상 `{"success": true, "drinks": [...]}` 형태를 따릅니다.
use serde::{Deserialize, Serialize};

use crate::domain::entities::drinks::{Drink, RecipeIngredient};

/// 레시피 재료 요약 표현
///
/// 공개 메뉴 목록에 노출되는 축약 형태로, 재료 이름을 제외한
/// 시각화 정보(색상, 비율)만 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortIngredientResponse {
    pub color: String,
    pub parts: i32,
}

impl From<&RecipeIngredient> for ShortIngredientResponse {
    fn from(ingredient: &RecipeIngredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// 음료 요약 응답
///
/// 공개 목록 엔드포인트에서 사용하는 축약 표현입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkShortResponse {
    pub id: String,
    pub title: String,
    pub recipe: Vec<ShortIngredientResponse>,
}

impl From<&Drink> for DrinkShortResponse {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id_string().unwrap_or_default(),
            title: drink.title.clone(),
            recipe: drink.recipe.iter().map(Into::into).collect(),
        }
    }
}

/// 음료 상세 응답
///
/// 재료 이름을 포함한 전체 레시피 표현으로, 상세 조회 권한이 있는
/// 사용자에게만 제공됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkDetailResponse {
    pub id: String,
    pub title: String,
    pub recipe: Vec<RecipeIngredient>,
}

impl From<&Drink> for DrinkDetailResponse {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id_string().unwrap_or_default(),
            title: drink.title.clone(),
            recipe: drink.recipe.clone(),
        }
    }
}

/// 음료 목록 응답 래퍼
///
/// 목록/생성/수정 엔드포인트가 공유하는 공통 응답 형식입니다.
/// 생성/수정 응답은 변경된 음료 하나를 담은 목록을 반환합니다.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkListResponse<T: Serialize> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T: Serialize> DrinkListResponse<T> {
    /// 성공 응답을 생성합니다.
    pub fn ok(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

/// 음료 삭제 응답
///
/// 삭제된 음료의 ID를 확인용으로 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub delete: String,
}

impl DeleteDrinkResponse {
    pub fn new(id: String) -> Self {
        Self { success: true, delete: id }
    }
}

/// 로그인 URL 응답
///
/// 클라이언트가 인터랙티브 로그인을 시작할 수 있는 Auth0 authorize URL을
/// 제공합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUrlResponse {
    pub success: bool,
    pub login_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_drink() -> Drink {
        Drink::new(
            "Latte".to_string(),
            vec![
                RecipeIngredient {
                    name: "espresso".to_string(),
                    color: "#6f4e37".to_string(),
                    parts: 1,
                },
                RecipeIngredient {
                    name: "milk".to_string(),
                    color: "#fffdd0".to_string(),
                    parts: 3,
                },
            ],
        )
    }

    #[test]
    fn test_short_response_drops_ingredient_names() {
        let drink = sample_drink();
        let short = DrinkShortResponse::from(&drink);

        let json = serde_json::to_value(&short).unwrap();
        let first = &json["recipe"][0];

        assert!(first.get("name").is_none());
        assert_eq!(first["color"], "#6f4e37");
        assert_eq!(first["parts"], 1);
    }

    #[test]
    fn test_detail_response_keeps_ingredient_names() {
        let drink = sample_drink();
        let detail = DrinkDetailResponse::from(&drink);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["recipe"][0]["name"], "espresso");
        assert_eq!(json["recipe"][1]["name"], "milk");
    }

    #[test]
    fn test_list_response_shape() {
        let drink = sample_drink();
        let response = DrinkListResponse::ok(vec![DrinkShortResponse::from(&drink)]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["drinks"].is_array());
    }

    #[test]
    fn test_delete_response_echoes_id() {
        let response = DeleteDrinkResponse::new("5f8d0d55b54764421b7156da".to_string());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["delete"], "5f8d0d55b54764421b7156da");
    }
}
