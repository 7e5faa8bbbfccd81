//! # Domain Models
//!
//! 저장되지 않는 도메인 모델들입니다.
//!
//! - [`auth`] - 인증 게이트가 요청에 첨부하는 사용자 식별 정보
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;
