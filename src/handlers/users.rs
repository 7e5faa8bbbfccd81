//! # User Registration Handlers
//!
//! | 메서드 | 경로 | 설명 | 응답 |
//! |--------|------|------|------|
//! | `POST` | `/api/users` | 회원가입 | 200 `{"token": "..."}` |
//!
//! ```bash
//! curl -X POST http://localhost:5000/api/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Jane","email":"jane@example.com","password":"secret1"}'
//! ```

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::RegisterRequest;
use crate::services::users::UserService;

/// 회원가입
///
/// # Errors
///
/// * 400 `{"errors":[...]}` - 입력 검증 실패 또는 이미 가입된 이메일
#[post("")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = UserService::instance()
        .register(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(token))
}
