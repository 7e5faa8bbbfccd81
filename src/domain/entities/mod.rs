//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ## 컬렉션
//!
//! | 엔티티 | 컬렉션 | 고유 인덱스 |
//! |--------|--------|-------------|
//! | [`users::User`] | `users` | `email_unique` |
//! | [`profiles::Profile`] | `profiles` | `user_unique` |
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 두고, 저장 후 리포지토리가 채워 넣습니다.
//! 프로필의 경력/학력 항목은 별도 컬렉션이 아니라 프로필 문서에 내장됩니다.
//!
//! ```text
//! entities/
//! ├── users/      ← User
//! └── profiles/   ← Profile, Experience, Education, Social
//! ```

pub mod profiles;
pub mod users;
