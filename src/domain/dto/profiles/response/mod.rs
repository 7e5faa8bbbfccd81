//! 프로필 관련 응답 DTO
//!
//! 소유 사용자의 `{_id, name, avatar}`를 포함한 프로필 응답을 정의합니다.

pub mod profile_response;

pub use profile_response::{EducationResponse, ExperienceResponse, ProfileOwner, ProfileResponse};
