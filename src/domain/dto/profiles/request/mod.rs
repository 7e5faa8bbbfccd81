//! 프로필 관련 요청 DTO

pub mod experience_request;
pub mod profile_request;

pub use experience_request::{EducationRequest, ExperienceRequest};
pub use profile_request::ProfileRequest;
