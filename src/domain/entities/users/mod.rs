//! Users Entity Module
//!
//! 이메일/비밀번호로 가입한 사용자 계정 엔티티입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(name, email, hashed_password, gravatar_url(&email));
//! let saved = UserRepository::instance().create(user).await?;
//! ```

pub mod user;

pub use user::User;
