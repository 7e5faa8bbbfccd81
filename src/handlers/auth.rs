//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 토큰 소유자 조회를 처리합니다.
//!
//! - `POST /api/auth` - 로그인, `{"token": "..."}` 반환
//! - `GET /api/auth` - `x-auth-token` 필요, 비밀번호를 제외한 사용자 정보 반환

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

/// 현재 로그인한 사용자 정보
#[get("", wrap = "AuthMiddleware::required()")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_id = user.object_id()?;
    let current = UserService::instance().get_current_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(current))
}

/// 로그인
///
/// 존재하지 않는 이메일과 틀린 비밀번호는 같은 응답
/// (`{"errors":[{"msg":"Invalid Credentials"}]}`)을 받습니다.
#[post("")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::debug!("로그인 시도: {}", payload.email);

    let token = UserService::instance().login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}
