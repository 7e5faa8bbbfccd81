//! JWT 클레임 구조체
//!
//! 토큰 페이로드는 `{ "user": { "id": ... }, "iat": ..., "exp": ... }` 형태이며,
//! 서버에 저장되지 않는 무상태 토큰입니다.
use serde::{Deserialize, Serialize};

/// 클레임 안의 사용자 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `user.id`: 사용자 ID
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: ClaimsUser,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(user_id: impl Into<String>, issued_at: i64, expires_in: i64) -> Self {
        Self {
            user: ClaimsUser { id: user_id.into() },
            iat: issued_at,
            exp: issued_at + expires_in,
        }
    }
}
