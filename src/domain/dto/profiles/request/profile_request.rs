//! # 프로필 생성/수정 요청 DTO
//!
//! `status`와 `skills`는 필수이며, 나머지 필드는 선택입니다.
//! 빈 문자열로 전달된 선택 필드는 `None`으로 정리되어 기존 값을 덮어쓰지 않습니다.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::profiles::{ProfileFields, Social};
use crate::utils::string_utils::{deserialize_optional_string, split_skills};

/// 프로필 생성/수정 요청
///
/// ```json
/// {
///   "status": "Developer",
///   "skills": "Rust, TypeScript, MongoDB",
///   "company": "Acme",
///   "githubusername": "octocat",
///   "twitter": "https://twitter.com/octocat"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: String,

    /// 콤마로 구분된 스킬 목록
    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub skills: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(default, alias = "github", deserialize_with = "deserialize_optional_string")]
    pub githubusername: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instagram: Option<String>,
}

/// 공백만 있는 값은 비어 있는 것으로 취급
fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(required("Status is required"));
    }
    Ok(())
}

/// 콤마로 나눈 뒤 남는 스킬이 하나 이상이어야 함
fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if split_skills(skills).is_empty() {
        return Err(required("Skills is required"));
    }
    Ok(())
}

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(message))
}

impl ProfileRequest {
    /// 저장용 필드 묶음으로 변환합니다.
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status.trim().to_string(),
            skills: split_skills(&self.skills),
            bio: self.bio,
            githubusername: self.githubusername,
            social: Social {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        }
    }
}
