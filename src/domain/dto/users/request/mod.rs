//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 필드 단위 검증을 수행합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! #[post("")]
//! pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let token = UserService::instance().register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(token))
//! }
//! ```
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 `AppError::ValidationError`로 변환되어
//! `400 {"errors": [{"msg", "param"}]}` 응답이 됩니다.

pub mod login_request;
pub mod register_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
