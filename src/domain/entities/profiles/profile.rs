use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `profiles` 컬렉션 문서
///
/// 사용자당 하나만 존재하며(`user_unique` 인덱스), 경력과 학력은
/// 하위 문서 배열로 내장됩니다. 새 항목은 배열 맨 앞에 추가됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 소유 사용자 (`users._id`)
    pub user: ObjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub status: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,

    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,

    pub date: DateTime,
}

/// 경력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 학력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 소셜 링크
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Social {
    pub fn is_empty(&self) -> bool {
        self == &Social::default()
    }
}

/// 프로필 생성/수정 시 `$set`으로 기록되는 필드 묶음
///
/// 전달되지 않은(`None`) 선택 필드는 문서에서 빠지므로 기존 값이 유지됩니다.
/// `social`은 요청마다 통째로 교체됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileFields {
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
    pub social: Social,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProfileFields {
        ProfileFields {
            company: Some("Acme".to_string()),
            website: None,
            location: None,
            status: "Developer".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            bio: None,
            githubusername: Some("octocat".to_string()),
            social: Social {
                twitter: Some("https://twitter.com/octocat".to_string()),
                ..Social::default()
            },
        }
    }

    #[test]
    fn test_profile_fields_skip_missing_optionals() {
        let doc = mongodb::bson::to_document(&fields()).unwrap();

        assert_eq!(doc.get_str("company").unwrap(), "Acme");
        assert!(!doc.contains_key("website"));
        assert!(!doc.contains_key("bio"));
        assert_eq!(doc.get_array("skills").unwrap().len(), 2);

        let social = doc.get_document("social").unwrap();
        assert_eq!(social.len(), 1);
        assert!(social.contains_key("twitter"));
    }

    #[test]
    fn test_profile_reads_document_without_lists() {
        let user = ObjectId::new();
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "user": user,
            "status": "Student",
            "date": DateTime::now(),
        };

        let profile: Profile = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(profile.user, user);
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.social.is_none());
    }

    #[test]
    fn test_social_is_empty() {
        assert!(Social::default().is_empty());
        assert!(!fields().social.is_empty());
    }
}
