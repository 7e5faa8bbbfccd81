//! 인증 관련 서비스
//!
//! - [`password_service`] - bcrypt 비밀번호 해싱/검증
//! - [`token_service`] - HS256 JWT 발급/검증

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
