use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `users` 컬렉션 문서
///
/// `password`에는 bcrypt 해시만 저장되며 응답으로 직렬화되지 않도록
/// 항상 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환해서 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 고유 인덱스 `email_unique`
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub date: DateTime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
            avatar,
            date: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id_until_saved() {
        let user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "https://www.gravatar.com/avatar/x".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("password").unwrap(), "$2b$04$hash");
    }
}
