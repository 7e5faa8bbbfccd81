//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 타입들입니다.
//! 엔티티를 그대로 내보내지 않고 DTO로 변환하여 비밀번호 해시 같은
//! 내부 필드가 응답에 섞이지 않도록 합니다.
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── users/      - 회원가입, 로그인 요청 / 사용자 응답
//! ├── profiles/   - 프로필, 경력, 학력 요청 / 프로필 응답
//! └── tokens/     - `{ "token": ... }` 응답
//! ```
//!
//! ## 검증
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서
//! `payload.validate()?`로 호출하면 `AppError::ValidationError`로 변환됩니다.

pub mod profiles;
pub mod tokens;
pub mod users;

pub use profiles::{
    EducationRequest, EducationResponse, ExperienceRequest, ExperienceResponse, ProfileOwner,
    ProfileRequest, ProfileResponse,
};
pub use tokens::TokenResponse;
pub use users::{LoginRequest, RegisterRequest, UserResponse};
