//! DevConnector 백엔드
//!
//! 개발자 커뮤니티를 위한 사용자/프로필 REST API 서비스입니다.
//! 이메일/비밀번호 가입, JWT 토큰 인증, 프로필(경력, 학력, 소셜 링크) 관리,
//! GitHub 저장소 조회를 제공하며 싱글톤 매크로 기반 의존성 주입을 사용합니다.
//!
//! # Features
//!
//! - **사용자 계정**: 회원가입, 로그인, 계정 삭제
//! - **JWT 인증**: `x-auth-token` 헤더 기반 상태 없는 인증
//! - **프로필**: 생성/수정, 경력과 학력 항목 관리
//! - **GitHub**: 프로필 사용자의 최근 저장소 조회
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자와 프로필 영구 저장
//!
//! # Architecture
//!
//! ```text
//! routes ─▶ handlers ─▶ services ─▶ repositories ─▶ MongoDB
//!    │                     │
//!    └─ AuthMiddleware     └─ GitHub API (reqwest)
//! ```
//!
//! 서비스와 리포지토리는 `#[service]`/`#[repository]` 싱글톤이며
//! `core::registry::ServiceLocator`가 시작 시 한 번에 생성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use devconnector_backend::services::users::UserService;
//!
//! let token = UserService::instance().register(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
