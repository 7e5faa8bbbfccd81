//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 스킬 분리, Gravatar URL
//! - [`date_utils`] - 날짜 문자열 파싱과 RFC 3339 출력
//! - [`display_terminal`] - 서버 시작 시 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{gravatar_url, split_skills};
//! use crate::utils::date_utils::parse_date;
//!
//! let avatar = gravatar_url("user@example.com");
//! let skills = split_skills("Rust, TypeScript");
//! let from = parse_date("2020-01-15");
//! ```

pub mod date_utils;
pub mod display_terminal;
pub mod string_utils;
