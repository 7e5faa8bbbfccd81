//! # 프로필 리포지토리 구현
//!
//! `profiles` 컬렉션에 대한 데이터 액세스 계층입니다.
//!
//! 모든 쓰기 연산은 단일 문서에 대한 원자적 업데이트 한 번으로 끝납니다.
//!
//! | 연산 | MongoDB 연산자 |
//! |------|----------------|
//! | `upsert` | `findOneAndUpdate` + `$set` / `$setOnInsert`, `upsert: true` |
//! | `push_experience`, `push_education` | `$push` + `$position: 0` |
//! | `remove_experience`, `remove_education` | `$pull` by `_id` |

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, to_document, Bson, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use singleton_macro::repository;
use std::sync::Arc;

use crate::{
    core::errors::{AppError, ErrorContext},
    db::Database,
    domain::entities::profiles::{Education, Experience, Profile, ProfileFields},
    repositories::is_duplicate_key_error,
};

/// 프로필 데이터 액세스 리포지토리
#[repository(name = "profile", collection = "profiles")]
pub struct ProfileRepository {
    /// 자동 주입되는 데이터베이스 컴포넌트
    db: Arc<Database>,
}

impl ProfileRepository {
    fn after_update() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    /// 사용자 ID로 프로필 조회
    pub async fn find_by_user(&self, user_id: &ObjectId) -> Result<Option<Profile>, AppError> {
        self.collection::<Profile>()
            .find_one(doc! { "user": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 프로필 조회
    pub async fn find_all(&self) -> Result<Vec<Profile>, AppError> {
        self.collection::<Profile>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 프로필 생성 또는 수정
    ///
    /// 조회 후 쓰기 대신 `upsert: true`인 `findOneAndUpdate` 한 번으로 처리하여
    /// 동시 요청 사이의 경쟁 상태가 없습니다. 빈 경력/학력 목록과 생성 시각은
    /// 문서가 새로 만들어질 때만 기록됩니다.
    ///
    /// 두 요청이 동시에 같은 사용자의 프로필을 처음 만들면 한쪽이 `user_unique`
    /// 인덱스 위반으로 실패할 수 있으며, 이 경우 일반 업데이트로 한 번 재시도합니다.
    pub async fn upsert(&self, user_id: &ObjectId, fields: &ProfileFields) -> Result<Profile, AppError> {
        let set = to_document(fields).context("Failed to encode profile fields")?;
        let update = Self::upsert_document(set);

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self
            .collection::<Profile>()
            .find_one_and_update(doc! { "user": *user_id }, update.clone())
            .with_options(options.clone())
            .await;

        let profile = match result {
            Err(e) if is_duplicate_key_error(&e) => {
                log::debug!("Concurrent profile insert for user {}, retrying as update", user_id);
                self.collection::<Profile>()
                    .find_one_and_update(doc! { "user": *user_id }, update)
                    .with_options(options)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?
            }
            other => other.map_err(|e| AppError::DatabaseError(e.to_string()))?,
        };

        profile.ok_or_else(|| AppError::InternalError("Upsert returned no document".to_string()))
    }

    fn upsert_document(set: Document) -> Document {
        doc! {
            "$set": set,
            "$setOnInsert": {
                "experience": [],
                "education": [],
                "date": DateTime::now(),
            },
        }
    }

    /// 사용자 프로필 삭제
    ///
    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    pub async fn delete_by_user(&self, user_id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Profile>()
            .delete_one(doc! { "user": *user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 경력 항목을 목록 맨 앞에 추가합니다.
    ///
    /// 프로필이 없으면 `Ok(None)`을 반환합니다.
    pub async fn push_experience(
        &self,
        user_id: &ObjectId,
        experience: &Experience,
    ) -> Result<Option<Profile>, AppError> {
        let entry = to_bson(experience).context("Failed to encode experience")?;
        self.push_front(user_id, "experience", entry).await
    }

    /// 학력 항목을 목록 맨 앞에 추가합니다.
    pub async fn push_education(
        &self,
        user_id: &ObjectId,
        education: &Education,
    ) -> Result<Option<Profile>, AppError> {
        let entry = to_bson(education).context("Failed to encode education")?;
        self.push_front(user_id, "education", entry).await
    }

    async fn push_front(
        &self,
        user_id: &ObjectId,
        field: &str,
        entry: Bson,
    ) -> Result<Option<Profile>, AppError> {
        self.collection::<Profile>()
            .find_one_and_update(doc! { "user": *user_id }, Self::push_front_document(field, entry))
            .with_options(Self::after_update())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 항목을 배열 맨 앞에 넣는 업데이트 문서
    fn push_front_document(field: &str, entry: Bson) -> Document {
        doc! { "$push": { field: { "$each": [entry], "$position": 0 } } }
    }

    /// 항목을 가진 프로필만 매칭하는 필터와 `$pull` 업데이트 문서
    ///
    /// 필터에 항목 `_id`를 넣어 없는 항목이면 매칭 자체가 되지 않도록 합니다.
    fn pull_by_id_documents(
        user_id: &ObjectId,
        field: &str,
        entry_id: &ObjectId,
    ) -> (Document, Document) {
        let entry_path = format!("{}._id", field);

        (
            doc! { "user": *user_id, entry_path: *entry_id },
            doc! { "$pull": { field: { "_id": *entry_id } } },
        )
    }

    /// ID로 경력 항목을 제거합니다.
    ///
    /// 해당 항목을 가진 프로필이 없으면 `Ok(None)`을 반환합니다.
    pub async fn remove_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError> {
        self.pull_by_id(user_id, "experience", experience_id).await
    }

    /// ID로 학력 항목을 제거합니다.
    pub async fn remove_education(
        &self,
        user_id: &ObjectId,
        education_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError> {
        self.pull_by_id(user_id, "education", education_id).await
    }

    async fn pull_by_id(
        &self,
        user_id: &ObjectId,
        field: &str,
        entry_id: &ObjectId,
    ) -> Result<Option<Profile>, AppError> {
        let (filter, update) = Self::pull_by_id_documents(user_id, field, entry_id);

        self.collection::<Profile>()
            .find_one_and_update(filter, update)
            .with_options(Self::after_update())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 컬렉션 인덱스 생성 (`user_unique`)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_unique".to_string())
                    .build(),
            )
            .build();

        self.collection::<Profile>()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_document_separates_set_and_insert_fields() {
        let update = ProfileRepository::upsert_document(doc! { "status": "Developer" });

        let set = update.get_document("$set").unwrap();
        let on_insert = update.get_document("$setOnInsert").unwrap();

        assert_eq!(set.get_str("status").unwrap(), "Developer");
        assert!(on_insert.get_array("experience").unwrap().is_empty());
        assert!(on_insert.get_array("education").unwrap().is_empty());
        assert!(on_insert.contains_key("date"));

        // 같은 경로를 $set과 $setOnInsert가 동시에 건드리면 MongoDB가 거부한다
        for key in on_insert.keys() {
            assert!(!set.contains_key(key));
        }
    }

    #[test]
    fn test_push_front_places_new_entry_first() {
        let entry = doc! { "_id": ObjectId::new(), "title": "Engineer" };
        let update = ProfileRepository::push_front_document("experience", Bson::Document(entry.clone()));

        let push = update.get_document("$push").unwrap();
        let experience = push.get_document("experience").unwrap();

        assert_eq!(experience.get_i32("$position").unwrap(), 0);
        let each = experience.get_array("$each").unwrap();
        assert_eq!(each.len(), 1);
        assert_eq!(each[0], Bson::Document(entry));
    }

    #[test]
    fn test_pull_by_id_matches_only_profiles_holding_the_entry() {
        let user_id = ObjectId::new();
        let entry_id = ObjectId::new();

        let (filter, update) =
            ProfileRepository::pull_by_id_documents(&user_id, "education", &entry_id);

        assert_eq!(filter.get_object_id("user").unwrap(), user_id);
        assert_eq!(filter.get_object_id("education._id").unwrap(), entry_id);

        let pull = update.get_document("$pull").unwrap();
        let target = pull.get_document("education").unwrap();
        assert_eq!(target.get_object_id("_id").unwrap(), entry_id);
        assert_eq!(target.len(), 1);
    }
}
