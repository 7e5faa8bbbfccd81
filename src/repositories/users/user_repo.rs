//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: `#[repository]` 매크로가 `Database`를 주입하고 `collection()`을 생성
//! - **데이터 무결성**: `email_unique` 인덱스로 동시 가입 경쟁 상황에서도 중복 차단
//! - **에러 변환**: 드라이버 에러는 `AppError::DatabaseError`로, 중복 키는 `ConflictError`로 변환

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::users::User,
    repositories::is_duplicate_key_error,
};

/// 이미 가입된 이메일로 가입을 시도할 때의 메시지
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// 사용자 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = UserRepository::instance();
/// if repo.find_by_email("alice@example.com").await?.is_some() {
///     return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
/// }
/// ```
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// 자동 주입되는 데이터베이스 컴포넌트
    db: Arc<Database>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 여러 ID의 사용자를 한 번에 조회합니다.
    ///
    /// 프로필 목록에 소유자 정보를 채울 때 N+1 조회를 피하기 위해 `$in`을 사용합니다.
    /// 존재하지 않는 ID는 결과에서 빠집니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection::<User>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 고유 인덱스 위반은 `ConflictError("User already exists")`로 변환됩니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError(USER_EXISTS_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("Inserted user id is not an ObjectId".to_string()))?;

        user.id = Some(id);
        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<User>()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 서버 시작 시 한 번 호출되며, 이미 존재하는 인덱스는 그대로 유지됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection::<User>()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
