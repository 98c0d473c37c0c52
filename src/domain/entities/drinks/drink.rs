//! Drink Entity Implementation
//!
//! 음료 엔티티의 핵심 구현체입니다.
//! 음료 제목과 레시피(재료 구성)를 포함하는 도메인 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 레시피 재료
///
/// 음료를 구성하는 단일 재료를 표현합니다. `parts`는 전체 음료에서
/// 해당 재료가 차지하는 비율 단위입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 재료 이름
    pub name: String,
    /// 시각화용 색상 (CSS 색상 문자열)
    pub color: String,
    /// 비율 단위 (1 이상)
    pub parts: i32,
}

/// 음료 엔티티
///
/// 메뉴에 노출되는 모든 음료를 표현하는 핵심 도메인 엔티티입니다.
/// 제목은 컬렉션 내에서 유일해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 음료 제목 (unique)
    pub title: String,
    /// 레시피 재료 목록
    pub recipe: Vec<RecipeIngredient>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Drink {
    /// 새 음료 생성
    ///
    /// 생성/수정 시간이 현재 시각으로 초기화된 음료 엔티티를 반환합니다.
    /// ID는 저장 시점에 MongoDB가 할당합니다.
    pub fn new(title: String, recipe: Vec<RecipeIngredient>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            recipe,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Vec<RecipeIngredient> {
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
        ]
    }

    #[test]
    fn test_new_drink_has_no_id() {
        let drink = Drink::new("Latte".to_string(), sample_recipe());

        assert!(drink.id.is_none());
        assert_eq!(drink.title, "Latte");
        assert_eq!(drink.recipe.len(), 2);
        assert_eq!(drink.created_at, drink.updated_at);
    }

    #[test]
    fn test_id_string_hex() {
        let mut drink = Drink::new("Latte".to_string(), sample_recipe());
        assert!(drink.id_string().is_none());

        let oid = ObjectId::new();
        drink.id = Some(oid);
        assert_eq!(drink.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_serialize_renames_id_field() {
        let mut drink = Drink::new("Latte".to_string(), sample_recipe());
        drink.id = Some(ObjectId::new());

        let json = serde_json::to_value(&drink).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_serialize_skips_missing_id() {
        let drink = Drink::new("Latte".to_string(), sample_recipe());

        let json = serde_json::to_value(&drink).unwrap();
        assert!(json.get("_id").is_none());
    }
}
