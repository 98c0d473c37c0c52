//! # 음료 리포지토리 구현
//!
//! 음료 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 제목 유니크 제약 조건 및 인덱스 관리

use crate::core::errors::AppError;
use crate::{
    caching::redis::RedisClient, core::registry::Repository, db::Database,
    domain::entities::drinks::drink::Drink,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 전체 음료 목록 캐시 키
const DRINKS_LIST_CACHE_KEY: &str = "drinks:all";

/// 조회 캐시 TTL (초)
const CACHE_TTL_SECONDS: usize = 300;

/// MongoDB 유니크 인덱스 위반 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반(E11000) 에러인지 판별합니다.
///
/// insert는 write error로, findAndModify는 command error로 위반을
/// 보고하므로 두 경로 모두 확인합니다.
fn is_duplicate_key_error(kind: &mongodb::error::ErrorKind) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 쓰기 에러를 AppError로 변환합니다. 유니크 인덱스 위반은 409로 구분합니다.
fn map_write_error(e: mongodb::error::Error) -> AppError {
    if is_duplicate_key_error(&e.kind) {
        AppError::ConflictError("이미 등록된 음료 제목입니다".to_string())
    } else {
        AppError::DatabaseError(e.to_string())
    }
}

/// 음료 데이터 액세스 리포지토리
///
/// 음료 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 5분 (300초)
/// - **키 패턴**:
///   - 전체 목록: `drinks:all`
///   - 개별 음료: `drink:{drink_id}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `drinks`
/// - **인덱스**: title(unique), created_at(desc)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::drinks::drink_repo::DrinkRepository;
///
/// let repo = DrinkRepository::instance();
/// let drinks = repo.find_all().await?;
/// ```
#[repository(name = "drink", collection = "drinks")]
pub struct DrinkRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 자동 주입되는 데이터베이스 컴포넌트입니다.
    /// `drinks` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    ///
    /// 자동 주입되는 Redis 클라이언트입니다.
    /// 조회 성능 향상을 위한 캐싱 레이어를 제공합니다.
    redis: Arc<RedisClient>,
}

impl DrinkRepository {
    /// 전체 음료 목록 조회
    ///
    /// 등록된 모든 음료를 ID 오름차순으로 반환합니다.
    /// 캐시 우선 조회를 통해 반복 조회 성능을 최적화합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `drinks:all`
    /// - **TTL**: 300초 (5분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_all(&self) -> Result<Vec<Drink>, AppError> {
        // 캐시에서 먼저 확인
        if let Ok(Some(cached)) = self.redis.get::<Vec<Drink>>(DRINKS_LIST_CACHE_KEY).await {
            return Ok(cached);
        }

        // DB 에서 조회
        let drinks: Vec<Drink> = self
            .collection::<Drink>()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (5분)
        if !drinks.is_empty() {
            let _ = self
                .redis
                .set_with_expiry(DRINKS_LIST_CACHE_KEY, &drinks, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(drinks)
    }

    /// ID로 음료 조회
    ///
    /// MongoDB ObjectId를 사용하여 음료를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Drink))` - 음료를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 음료가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Drink>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Drink>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let drink = self
            .collection::<Drink>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref drink) = drink {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, drink, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(drink)
    }

    /// 제목으로 음료 조회
    ///
    /// 제목은 컬렉션 내에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 중복 등록 방지 확인에 사용됩니다.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Drink>, AppError> {
        self.collection::<Drink>()
            .find_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 음료 생성
    ///
    /// 제목 중복 여부를 사전에 검증하고, 성공 시 목록 캐시를 무효화합니다.
    /// 검증과 저장 사이에 끼어든 동시 등록이 유니크 인덱스에 걸린 경우에도
    /// 409로 보고됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Drink)` - 생성된 음료 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 제목 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut drink: Drink) -> Result<Drink, AppError> {
        // 중복 확인
        if self.find_by_title(&drink.title).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 음료 제목입니다".to_string(),
            ));
        }

        // DB에 저장
        let result = self
            .collection::<Drink>()
            .insert_one(&drink)
            .await
            .map_err(map_write_error)?;

        drink.id = result.inserted_id.as_object_id();

        // 목록 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;
        let _ = self.redis.del(DRINKS_LIST_CACHE_KEY).await;

        Ok(drink)
    }

    /// 음료 정보 업데이트
    ///
    /// 기존 음료의 정보를 부분적으로 업데이트합니다. `$set` 연산자를 통해
    /// 지정된 필드만 변경되며, find_one_and_update로 조회와 업데이트를
    /// 원자적으로 수행합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Drink))` - 업데이트된 음료 정보 (최신 상태)
    /// * `Ok(None)` - 해당 ID의 음료가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 변경된 제목이 유니크 인덱스에 걸린 경우
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<Drink>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_drink = self
            .collection::<Drink>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(map_write_error)?;

        // 캐시 무효화
        if updated_drink.is_some() {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(DRINKS_LIST_CACHE_KEY).await;
        }

        Ok(updated_drink)
    }

    /// 음료 삭제
    ///
    /// 지정된 ID의 음료를 데이터베이스에서 영구적으로 삭제합니다.
    /// 삭제 성공 시 관련된 모든 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 음료가 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 음료가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self
            .collection::<Drink>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            let _ = self.redis.del(DRINKS_LIST_CACHE_KEY).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 음료 컬렉션에 필요한 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **제목 유니크 인덱스**: 중복 제목 방지 및 제목 조회 최적화
    /// 2. **생성일 인덱스**: 최근 등록 음료 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Drink>();

        // 제목 유니크 인덱스
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_unique".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([title_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::from_document;
    use mongodb::error::{CommandError, ErrorKind, WriteError, WriteFailure};

    fn duplicate_write_error() -> WriteError {
        // WriteError는 non_exhaustive라 서버 응답 형태의 문서에서 역직렬화합니다
        from_document(doc! {
            "code": DUPLICATE_KEY_CODE,
            "codeName": "DuplicateKey",
            "code_name": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: drinks index: title_unique",
            "message": "E11000 duplicate key error collection: drinks index: title_unique",
        })
        .unwrap()
    }

    #[test]
    fn test_duplicate_key_detected_on_insert() {
        // insert_one 경로: write error로 보고되는 경우
        let kind = ErrorKind::Write(WriteFailure::WriteError(duplicate_write_error()));
        assert!(is_duplicate_key_error(&kind));
    }

    #[test]
    fn test_duplicate_key_detected_on_find_and_modify() {
        // find_one_and_update 경로: command error로 보고되는 경우
        let command_error: CommandError = from_document(doc! {
            "code": DUPLICATE_KEY_CODE,
            "codeName": "DuplicateKey",
            "code_name": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: drinks index: title_unique",
            "message": "E11000 duplicate key error collection: drinks index: title_unique",
        })
        .unwrap();
        let kind = ErrorKind::Command(command_error);
        assert!(is_duplicate_key_error(&kind));
    }

    #[test]
    fn test_other_write_error_is_not_duplicate() {
        let write_error: WriteError = from_document(doc! {
            "code": 121,
            "codeName": "DocumentValidationFailure",
            "code_name": "DocumentValidationFailure",
            "errmsg": "Document failed validation",
            "message": "Document failed validation",
        })
        .unwrap();
        let kind = ErrorKind::Write(WriteFailure::WriteError(write_error));
        assert!(!is_duplicate_key_error(&kind));
    }

    #[test]
    fn test_map_write_error_duplicate_becomes_conflict() {
        let kind = ErrorKind::Write(WriteFailure::WriteError(duplicate_write_error()));
        let error = map_write_error(mongodb::error::Error::from(kind));

        match error {
            AppError::ConflictError(message) => assert!(message.contains("이미 등록된")),
            other => panic!("ConflictError가 아닌 에러: {:?}", other),
        }
    }

    #[test]
    fn test_map_write_error_other_becomes_database_error() {
        let error = map_write_error(mongodb::error::Error::custom("connection reset"));

        assert!(matches!(error, AppError::DatabaseError(_)));
    }
}
