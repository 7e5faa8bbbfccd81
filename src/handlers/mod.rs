//! # HTTP Request Handlers Module
//!
//! 요청을 검증하고 서비스 레이어로 위임한 뒤 응답을 만듭니다.
//! 에러는 모두 `AppError`로 전파되어 `ResponseError` 구현이 상태 코드와 본문을 결정합니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories ──▶ MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입 (`POST /api/users`)
//! - **`auth`**: 로그인과 현재 사용자 조회 (`POST /api/auth`, `GET /api/auth`)
//! - **`profiles`**: 프로필, 경력, 학력, GitHub 저장소 (`/api/profile/*`)
//!
//! 보호된 엔드포인트는 `wrap = "AuthMiddleware::required()"`로 인증 게이트를 거치고,
//! 핸들러는 `AuthenticatedUser` 추출자로 사용자 ID를 받습니다.
//!
//! ```rust,ignore
//! #[post("", wrap = "AuthMiddleware::required()")]
//! pub async fn upsert_profile(
//!     user: AuthenticatedUser,
//!     payload: web::Json<ProfileRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let profile = ProfileService::instance()
//!         .upsert_profile(&user.object_id()?, payload.into_inner())
//!         .await?;
//!     Ok(HttpResponse::Ok().json(profile))
//! }
//! ```

pub mod auth;
pub mod profiles;
pub mod users;
