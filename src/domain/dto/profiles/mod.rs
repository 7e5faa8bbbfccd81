//! # 프로필 DTO 모듈
//!
//! ```text
//! profiles/
//! ├── request/
//! │   ├── profile_request.rs      ← POST /api/profile
//! │   └── experience_request.rs   ← PUT /api/profile/experience, /education
//! └── response/
//!     └── profile_response.rs
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
