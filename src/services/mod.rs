//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스들입니다. 모두 `#[service]` 매크로로 싱글톤 관리되며,
//! `Arc<T>` 필드로 선언한 리포지토리와 다른 서비스가 자동 주입됩니다.
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`auth::PasswordService`] | bcrypt 해싱/검증 |
//! | [`auth::TokenService`] | JWT 발급/검증 |
//! | [`users::UserService`] | 회원가입, 로그인, 현재 사용자 |
//! | [`profiles::ProfileService`] | 프로필 CRUD, 경력/학력, 계정 삭제 |
//! | [`github::GithubService`] | GitHub 저장소 조회 |
//!
//! 의존성이 있는 서비스는 의존성이 없는 서비스나 리포지토리에만 의존합니다.

pub mod auth;
pub mod github;
pub mod profiles;
pub mod users;
