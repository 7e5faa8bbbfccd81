//! # 사용자 DTO 모듈
//!
//! 회원가입, 로그인 요청과 사용자 조회 응답을 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs   ← POST /api/users
//! │   └── login_request.rs      ← POST /api/auth
//! └── response/
//!     └── user_response.rs      ← GET /api/auth
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
