//! Profiles Entity Module
//!
//! 개발자 프로필과 내장 하위 문서(경력, 학력, 소셜 링크)를 정의합니다.

pub mod profile;

pub use profile::{Education, Experience, Profile, ProfileFields, Social};
