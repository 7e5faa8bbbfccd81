//! # Core Framework Module
//!
//! 의존성 주입 컨테이너와 애플리케이션 전역 에러 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 보관소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: `thiserror` 기반 에러 타입
//! - **HTTP 통합**: `ResponseError` 구현으로 상태 코드와 JSON 본문 결정
//! - **필드 검증**: `validator` 에러를 `{"errors":[{"msg","param"}]}` 형태로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::{repository, service};
//!
//! #[repository(name = "user", collection = "users")]
//! pub struct UserRepository {
//!     db: Arc<Database>,
//! }
//!
//! #[service(name = "user")]
//! pub struct UserService {
//!     user_repo: Arc<UserRepository>, // 자동 주입
//! }
//!
//! // 애플리케이션 시작 시
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all().await?;
//!
//! let user_service = UserService::instance();
//! ```
//!
//! `#[service]`/`#[repository]`의 `name`은 타입 이름에서 `Service`/`Repository`
//! 접미사를 뗀 소문자와 같아야 `ServiceLocator::get`이 생성자를 찾을 수 있습니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
