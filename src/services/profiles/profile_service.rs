//! # 프로필 관리 서비스 구현
//!
//! 프로필 생성/수정/조회, 경력과 학력 항목 관리, 계정 삭제를 담당합니다.
//! 모든 응답에는 소유 사용자의 `{_id, name, avatar}`가 채워집니다.
//!
//! ## 계정 삭제
//!
//! 프로필과 사용자 문서를 순서대로 삭제합니다. MongoDB 다중 문서 트랜잭션은
//! 레플리카 셋이 필요하므로 사용하지 않으며, 두 삭제 사이에서 실패하면 프로필 없는
//! 사용자가 남을 수 있습니다. 삭제는 멱등이므로 같은 요청을 다시 보내면 정리됩니다.

use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::{
        dto::profiles::{
            request::{EducationRequest, ExperienceRequest, ProfileRequest},
            response::ProfileResponse,
        },
        entities::profiles::Profile,
    },
    repositories::{profiles::ProfileRepository, users::UserRepository},
};

pub const NO_PROFILE_MESSAGE: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Profile not found";

/// 프로필 관리 서비스
#[service(name = "profile")]
pub struct ProfileService {
    profile_repo: Arc<ProfileRepository>,
    user_repo: Arc<UserRepository>,
}

impl ProfileService {
    /// 단일 프로필에 소유자 정보를 채워 응답으로 변환합니다.
    async fn populate(&self, profile: Profile) -> Result<ProfileResponse, AppError> {
        let owner = self.user_repo.find_by_id(&profile.user).await?;
        Ok(ProfileResponse::new(profile, owner.as_ref()))
    }

    /// 로그인한 사용자의 프로필
    ///
    /// 프로필이 없으면 400 `There is no profile for this user`.
    pub async fn get_my_profile(&self, user_id: &ObjectId) -> Result<ProfileResponse, AppError> {
        let profile = self
            .profile_repo
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(NO_PROFILE_MESSAGE.to_string()))?;

        self.populate(profile).await
    }

    /// 프로필 생성 또는 수정
    pub async fn upsert_profile(
        &self,
        user_id: &ObjectId,
        request: ProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        let fields = request.into_fields();
        let profile = self.profile_repo.upsert(user_id, &fields).await?;

        log::info!("✅ 프로필 저장 완료: user={}", user_id);
        self.populate(profile).await
    }

    /// 전체 프로필 목록
    ///
    /// 소유자 정보는 `$in` 조회 한 번으로 채웁니다.
    pub async fn get_all_profiles(&self) -> Result<Vec<ProfileResponse>, AppError> {
        let profiles = self.profile_repo.find_all().await?;

        let mut owner_ids: Vec<ObjectId> = profiles.iter().map(|p| p.user).collect();
        owner_ids.sort();
        owner_ids.dedup();

        let owners: HashMap<ObjectId, _> = self
            .user_repo
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let owner = owners.get(&profile.user);
                ProfileResponse::new(profile, owner)
            })
            .collect())
    }

    /// 사용자 ID로 프로필 조회
    ///
    /// ID 형식이 잘못되었거나 프로필이 없으면 400 `Profile not found`.
    pub async fn get_profile_by_user_id(&self, user_id: &str) -> Result<ProfileResponse, AppError> {
        let not_found = || AppError::BadRequest(PROFILE_NOT_FOUND_MESSAGE.to_string());

        let user_id = ObjectId::parse_str(user_id).map_err(|_| not_found())?;
        let profile = self
            .profile_repo
            .find_by_user(&user_id)
            .await?
            .ok_or_else(not_found)?;

        self.populate(profile).await
    }

    /// 프로필과 사용자 계정을 삭제합니다.
    ///
    /// 이미 삭제된 레코드는 에러로 취급하지 않습니다.
    pub async fn delete_account(&self, user_id: &ObjectId) -> Result<(), AppError> {
        let profile_deleted = self.profile_repo.delete_by_user(user_id).await?;
        let user_deleted = self.user_repo.delete(user_id).await?;

        log::info!(
            "🗑️ 계정 삭제: user={} (profile: {}, user: {})",
            user_id,
            profile_deleted,
            user_deleted
        );

        Ok(())
    }

    /// 경력 항목 추가 (목록 맨 앞)
    pub async fn add_experience(
        &self,
        user_id: &ObjectId,
        request: ExperienceRequest,
    ) -> Result<ProfileResponse, AppError> {
        let experience = request.into_experience()?;

        let profile = self
            .profile_repo
            .push_experience(user_id, &experience)
            .await?
            .ok_or_else(|| AppError::BadRequest(NO_PROFILE_MESSAGE.to_string()))?;

        self.populate(profile).await
    }

    /// 경력 항목 삭제
    pub async fn delete_experience(
        &self,
        user_id: &ObjectId,
        experience_id: &str,
    ) -> Result<ProfileResponse, AppError> {
        let removed = match ObjectId::parse_str(experience_id) {
            Ok(id) => self.profile_repo.remove_experience(user_id, &id).await?,
            Err(_) => None,
        };

        let profile = match removed {
            Some(profile) => profile,
            None => return Err(self.missing_entry(user_id, "Experience not found").await),
        };

        self.populate(profile).await
    }

    /// 학력 항목 추가 (목록 맨 앞)
    pub async fn add_education(
        &self,
        user_id: &ObjectId,
        request: EducationRequest,
    ) -> Result<ProfileResponse, AppError> {
        let education = request.into_education()?;

        let profile = self
            .profile_repo
            .push_education(user_id, &education)
            .await?
            .ok_or_else(|| AppError::BadRequest(NO_PROFILE_MESSAGE.to_string()))?;

        self.populate(profile).await
    }

    /// 학력 항목 삭제
    pub async fn delete_education(
        &self,
        user_id: &ObjectId,
        education_id: &str,
    ) -> Result<ProfileResponse, AppError> {
        let removed = match ObjectId::parse_str(education_id) {
            Ok(id) => self.profile_repo.remove_education(user_id, &id).await?,
            Err(_) => None,
        };

        let profile = match removed {
            Some(profile) => profile,
            None => return Err(self.missing_entry(user_id, "Education not found").await),
        };

        self.populate(profile).await
    }

    /// 삭제할 항목이 없을 때 프로필 자체가 없는지 구분합니다.
    async fn missing_entry(&self, user_id: &ObjectId, message: &str) -> AppError {
        match self.profile_repo.find_by_user(user_id).await {
            Ok(Some(_)) => AppError::NotFound(message.to_string()),
            Ok(None) => AppError::BadRequest(NO_PROFILE_MESSAGE.to_string()),
            Err(e) => e,
        }
    }
}
