use serde::Serialize;

use crate::domain::entities::profiles::{Education, Experience, Profile, Social};
use crate::domain::entities::users::User;
use crate::utils::date_utils::format_date;

/// 프로필 소유자 요약 (`populate('user', ['name', 'avatar'])`에 해당)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOwner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for ProfileOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(exp: Experience) -> Self {
        Self {
            id: exp.id.to_hex(),
            title: exp.title,
            company: exp.company,
            location: exp.location,
            from: format_date(&exp.from),
            to: exp.to.as_ref().map(format_date),
            current: exp.current,
            description: exp.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(edu: Education) -> Self {
        Self {
            id: edu.id.to_hex(),
            school: edu.school,
            degree: edu.degree,
            fieldofstudy: edu.fieldofstudy,
            from: format_date(&edu.from),
            to: edu.to.as_ref().map(format_date),
            current: edu.current,
            description: edu.description,
        }
    }
}

/// 프로필 응답 DTO
///
/// 소유 사용자가 이미 삭제된 경우 `user`는 `null`입니다.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<ProfileOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    pub date: String,
}

impl ProfileResponse {
    pub fn new(profile: Profile, owner: Option<&User>) -> Self {
        Self {
            id: profile.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: owner.map(ProfileOwner::from),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            social: profile.social.filter(|social| !social.is_empty()),
            date: format_date(&profile.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date_utils::parse_date;
    use mongodb::bson::{oid::ObjectId, DateTime};

    fn sample_profile(user: ObjectId) -> Profile {
        Profile {
            id: Some(ObjectId::new()),
            user,
            company: None,
            website: None,
            location: Some("Seoul".to_string()),
            status: "Developer".to_string(),
            skills: vec!["Rust".to_string()],
            bio: None,
            githubusername: None,
            experience: vec![Experience {
                id: ObjectId::new(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: parse_date("2018-01-01").unwrap(),
                to: None,
                current: true,
                description: None,
            }],
            education: vec![],
            social: None,
            date: DateTime::now(),
        }
    }

    #[test]
    fn test_profile_response_populates_owner() {
        let user_id = ObjectId::new();
        let mut user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "hash".to_string(),
            "avatar-url".to_string(),
        );
        user.id = Some(user_id);

        let json = serde_json::to_value(ProfileResponse::new(sample_profile(user_id), Some(&user))).unwrap();

        assert_eq!(json["user"]["_id"], user_id.to_hex());
        assert_eq!(json["user"]["name"], "Jane");
        assert_eq!(json["user"]["avatar"], "avatar-url");
        assert!(json["user"].get("email").is_none());
        assert_eq!(json["experience"][0]["from"], "2018-01-01T00:00:00.000Z");
        assert!(json["experience"][0]["to"].is_null());
        assert!(json.get("company").is_none());
    }

    #[test]
    fn test_empty_social_is_omitted() {
        let mut profile = sample_profile(ObjectId::new());
        profile.social = Some(Social::default());
        let json = serde_json::to_value(ProfileResponse::new(profile, None)).unwrap();
        assert!(json.get("social").is_none());

        let mut profile = sample_profile(ObjectId::new());
        profile.social = Some(Social {
            twitter: Some("https://twitter.com/jane".to_string()),
            ..Social::default()
        });
        let json = serde_json::to_value(ProfileResponse::new(profile, None)).unwrap();
        assert_eq!(json["social"]["twitter"], "https://twitter.com/jane");
    }

    #[test]
    fn test_profile_response_without_owner() {
        let json = serde_json::to_value(ProfileResponse::new(sample_profile(ObjectId::new()), None)).unwrap();
        assert!(json["user"].is_null());
    }
}
