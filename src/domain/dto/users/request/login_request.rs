//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "john@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing_password = LoginRequest {
            email: "john@example.com".to_string(),
            password: String::new(),
        };
        let errors = missing_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let bad_email = LoginRequest {
            email: "john".to_string(),
            password: "x".to_string(),
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
