//! 경력 / 학력 추가 요청 DTO

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::profiles::{Education, Experience};
use crate::utils::date_utils::parse_date;
use crate::utils::string_utils::deserialize_optional_string;

/// 경력 추가 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,

    /// 시작일 (RFC 3339 또는 `YYYY-MM-DD`)
    #[serde(default)]
    #[validate(length(min = 1, message = "Date from is required"))]
    pub from: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub to: Option<String>,

    #[serde(default)]
    pub current: bool,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ExperienceRequest {
    /// 새 `_id`를 부여한 경력 항목으로 변환합니다.
    ///
    /// 날짜 형식이 잘못된 경우 해당 필드의 검증 에러를 반환합니다.
    pub fn into_experience(self) -> AppResult<Experience> {
        let (from, to) = parse_period(&self.from, self.to.as_deref())?;

        Ok(Experience {
            id: ObjectId::new(),
            title: self.title,
            company: self.company,
            location: self.location,
            from,
            to,
            current: self.current,
            description: self.description,
        })
    }
}

/// 학력 추가 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EducationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub fieldofstudy: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Date from is required"))]
    pub from: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub to: Option<String>,

    #[serde(default)]
    pub current: bool,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl EducationRequest {
    pub fn into_education(self) -> AppResult<Education> {
        let (from, to) = parse_period(&self.from, self.to.as_deref())?;

        Ok(Education {
            id: ObjectId::new(),
            school: self.school,
            degree: self.degree,
            fieldofstudy: self.fieldofstudy,
            from,
            to,
            current: self.current,
            description: self.description,
        })
    }
}

fn parse_period(
    from: &str,
    to: Option<&str>,
) -> AppResult<(mongodb::bson::DateTime, Option<mongodb::bson::DateTime>)> {
    let from = parse_date(from).ok_or_else(|| AppError::field("from", "Date from is invalid"))?;

    let to = match to {
        Some(value) => Some(parse_date(value).ok_or_else(|| AppError::field("to", "Date to is invalid"))?),
        None => None,
    };

    Ok((from, to))
}
