use serde::Serialize;

use crate::domain::entities::users::User;
use crate::utils::date_utils::format_date;

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 계정 정보입니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    /// 가입 시각 (RFC 3339)
    pub date: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            avatar,
            date,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            avatar,
            date: format_date(&date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_password_is_never_serialized() {
        let id = ObjectId::new();
        let mut user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            "avatar".to_string(),
        );
        user.id = Some(id);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["email"], "jane@example.com");
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("secret-hash"));
    }
}
