//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (User, Profile)
//! ├── dto       - 요청/응답 객체
//! └── models    - 저장되지 않는 모델 (인증 사용자, JWT 클레임)
//!      │
//!      ▼
//! Services → Repositories → Database
//! ```
//!
//! ## 변환 흐름
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기 + 검증
//! payload.validate()?;
//!
//! // 2. 엔티티/저장 필드로 변환
//! let fields = payload.into_inner().into_fields();
//!
//! // 3. 리포지토리 저장
//! let profile = profile_repo.upsert(&user_id, &fields).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = ProfileResponse::new(profile, owner.as_ref());
//! ```

pub mod dto;
pub mod entities;
pub mod models;
