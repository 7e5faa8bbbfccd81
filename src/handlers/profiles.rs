//! # Profile HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/api/profile/me` | ✅ | 내 프로필 |
//! | `POST` | `/api/profile` | ✅ | 프로필 생성/수정 |
//! | `GET` | `/api/profile` | | 전체 프로필 |
//! | `GET` | `/api/profile/user/{user_id}` | | 사용자별 프로필 |
//! | `DELETE` | `/api/profile` | ✅ | 프로필과 계정 삭제 |
//! | `PUT` | `/api/profile/experience` | ✅ | 경력 추가 |
//! | `DELETE` | `/api/profile/experience/{exp_id}` | ✅ | 경력 삭제 |
//! | `PUT` | `/api/profile/education` | ✅ | 학력 추가 |
//! | `DELETE` | `/api/profile/education/{edu_id}` | ✅ | 학력 삭제 |
//! | `GET` | `/api/profile/github/{username}` | | GitHub 저장소 목록 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::profiles::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::github::GithubService;
use crate::services::profiles::ProfileService;

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_my_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance()
        .get_my_profile(&user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필 생성 또는 수정
///
/// 전달하지 않은 선택 필드는 기존 값을 유지합니다.
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn upsert_profile(
    user: AuthenticatedUser,
    payload: web::Json<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = ProfileService::instance()
        .upsert_profile(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("")]
pub async fn get_all_profiles() -> Result<HttpResponse, AppError> {
    let profiles = ProfileService::instance().get_all_profiles().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

#[get("/user/{user_id}")]
pub async fn get_profile_by_user_id(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance()
        .get_profile_by_user_id(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필과 사용자 계정 삭제
#[delete("", wrap = "AuthMiddleware::required()")]
pub async fn delete_account(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    ProfileService::instance()
        .delete_account(&user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "msg": "User deleted" })))
}

#[put("/experience", wrap = "AuthMiddleware::required()")]
pub async fn add_experience(
    user: AuthenticatedUser,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = ProfileService::instance()
        .add_experience(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/experience/{exp_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_experience(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance()
        .delete_experience(&user.object_id()?, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[put("/education", wrap = "AuthMiddleware::required()")]
pub async fn add_education(
    user: AuthenticatedUser,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = ProfileService::instance()
        .add_education(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/education/{edu_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_education(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance()
        .delete_education(&user.object_id()?, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// GitHub 저장소 목록 (응답 본문을 그대로 전달)
#[get("/github/{username}")]
pub async fn get_github_repos(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let repos = GithubService::instance()
        .get_repositories(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(repos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_protected_profile_routes_reject_missing_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/profile")
                    .service(get_my_profile)
                    .service(upsert_profile)
                    .service(delete_account)
                    .service(add_experience)
                    .service(delete_experience)
                    .service(add_education)
                    .service(delete_education),
            ),
        )
        .await;

        let requests = vec![
            test::TestRequest::get().uri("/api/profile/me"),
            test::TestRequest::post().uri("/api/profile"),
            test::TestRequest::delete().uri("/api/profile"),
            test::TestRequest::put().uri("/api/profile/experience"),
            test::TestRequest::delete().uri("/api/profile/experience/abc"),
            test::TestRequest::put().uri("/api/profile/education"),
            test::TestRequest::delete().uri("/api/profile/education/abc"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status().as_u16(), 401);
        }
    }
}
