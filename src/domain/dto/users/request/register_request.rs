//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `name` | 필수 | `Name is required` |
//! | `email` | 이메일 형식 | `Please include a valid email` |
//! | `password` | 6자 이상 | `Please enter a password with 6 or more characters` |
//!
//! 누락된 필드는 빈 문자열로 채워져 역직렬화 에러 대신 필드 검증 에러로 응답됩니다.
//! 이메일 중복 여부는 서비스 계층에서 확인합니다.

use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "password": "secret123"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}
