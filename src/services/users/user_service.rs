//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 현재 사용자 조회를 담당합니다.
//!
//! ```text
//! register ─► 중복 확인 ─► Gravatar ─► bcrypt 해싱 ─► 저장 ─► 토큰 발급
//! login    ─► 이메일 조회 ─► bcrypt 검증 ─► 토큰 발급
//! me       ─► ID 조회 ─► 비밀번호 제외 응답
//! ```
//!
//! ## 보안 설계
//!
//! - 이메일이 없는 경우와 비밀번호가 틀린 경우 모두 `Invalid Credentials`로 응답하여
//!   계정 존재 여부를 노출하지 않습니다.
//! - 이메일은 앞뒤 공백 제거 후 소문자로 정규화하여 저장/조회합니다.
//! - 응답 DTO 변환 시 비밀번호 해시는 항상 제외됩니다.

use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::{
        dto::{
            tokens::TokenResponse,
            users::{
                request::{LoginRequest, RegisterRequest},
                response::UserResponse,
            },
        },
        entities::users::User,
    },
    repositories::users::{user_repo::USER_EXISTS_MESSAGE, UserRepository},
    services::auth::{PasswordService, TokenService},
    utils::string_utils::gravatar_url,
};

/// 사용자 관리 서비스
///
/// ```rust,ignore
/// let user_service = UserService::instance();
/// let TokenResponse { token } = user_service.register(request).await?;
/// ```
#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    password_service: Arc<PasswordService>,
    token_service: Arc<TokenService>,
}

impl UserService {
    /// 회원가입 후 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일 (`User already exists`)
    /// * `AppError::InternalError` - 해싱 또는 토큰 서명 실패
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&request.email);

        let existing = self.user_repo.find_by_email(&email).await?;
        ensure_email_available(existing.as_ref(), &email)?;

        let avatar = gravatar_url(&email);
        let password_hash = self
            .password_service
            .hash_password_blocking(request.password)
            .await?;

        let user = User::new(request.name.trim().to_string(), email, password_hash, avatar);
        let created = self.user_repo.create(user).await?;

        let user_id = created
            .id_string()
            .ok_or_else(|| AppError::InternalError("Created user has no id".to_string()))?;

        log::info!("✅ 사용자 가입 완료: {}", user_id);

        let token = self.token_service.issue_token(&user_id)?;
        Ok(TokenResponse::new(token))
    }

    /// 이메일/비밀번호로 로그인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 이메일이 없거나 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&request.email);
        let user = self.user_repo.find_by_email(&email).await?;

        let user = match_credentials(&self.password_service, user, request.password).await?;

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("Stored user has no id".to_string()))?;

        let token = self.token_service.issue_token(&user_id)?;
        Ok(TokenResponse::new(token))
    }

    /// 토큰의 사용자 ID로 현재 사용자를 조회합니다.
    ///
    /// 토큰은 유효하지만 계정이 삭제된 경우 `NotFound`를 반환합니다.
    pub async fn get_current_user(&self, user_id: &ObjectId) -> Result<UserResponse, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

/// 같은 이메일로 가입된 사용자가 있으면 `ConflictError`를 반환합니다.
pub(crate) fn ensure_email_available(existing: Option<&User>, email: &str) -> Result<(), AppError> {
    match existing {
        Some(_) => {
            log::debug!("이미 가입된 이메일로 가입 시도: {}", email);
            Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()))
        }
        None => Ok(()),
    }
}

/// 조회된 사용자와 입력 비밀번호를 대조합니다.
///
/// 사용자가 없는 경우와 비밀번호가 틀린 경우 같은 에러를 반환합니다.
pub(crate) async fn match_credentials(
    password_service: &PasswordService,
    user: Option<User>,
    password: String,
) -> Result<User, AppError> {
    let Some(user) = user else {
        log::debug!("로그인 실패: 존재하지 않는 이메일");
        return Err(AppError::InvalidCredentials);
    };

    if !password_service
        .verify_password_blocking(password, user.password.clone())
        .await?
    {
        log::debug!("로그인 실패: 비밀번호 불일치");
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

/// 이메일 정규화 (앞뒤 공백 제거, 소문자)
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    fn stored_user(password: &str) -> User {
        let hash = PasswordService::instance()
            .hash_password_with_cost(password, 4)
            .unwrap();
        let mut user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            hash,
            gravatar_url("jane@example.com"),
        );
        user.id = Some(ObjectId::new());
        user
    }

    async fn rendered(error: AppError) -> (u16, String) {
        let response = error.error_response();
        let status = response.status().as_u16();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_matching_password_returns_user() {
        let service = PasswordService::instance();
        let user = stored_user("secret123");

        let matched = match_credentials(&service, Some(user.clone()), "secret123".to_string())
            .await
            .unwrap();
        assert_eq!(matched.id, user.id);
    }

    #[actix_web::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let service = PasswordService::instance();

        let unknown = match_credentials(&service, None, "secret123".to_string())
            .await
            .unwrap_err();
        let wrong = match_credentials(&service, Some(stored_user("secret123")), "nope".to_string())
            .await
            .unwrap_err();

        let unknown = rendered(unknown).await;
        let wrong = rendered(wrong).await;

        assert_eq!(unknown, wrong);
        assert_eq!(unknown.0, 400);
        assert!(unknown.1.contains("Invalid Credentials"));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_response() {
        let existing = stored_user("secret123");
        let error = ensure_email_available(Some(&existing), "jane@example.com").unwrap_err();
        let (status, body) = rendered(error).await;

        assert_eq!(status, 400);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": [{ "msg": "User already exists" }] }));
    }

    #[test]
    fn test_new_email_is_available() {
        assert!(ensure_email_available(None, "jane@example.com").is_ok());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
    }
}
