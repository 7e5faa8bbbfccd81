//! API 라우트 설정 모듈
//!
//! 기능별 스코프로 핸들러를 묶어 등록합니다. 인증이 필요한 엔드포인트는
//! 핸들러 선언부의 `wrap = "AuthMiddleware::required()"`로 개별 보호되므로
//! 같은 스코프 안에 공개/보호 라우트가 섞여 있습니다.
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(json_config())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
}

/// 회원가입
///
/// - `POST /api/users`
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/users").service(handlers::users::register));
}

/// 로그인과 현재 사용자
///
/// - `GET /api/auth` (토큰 필요)
/// - `POST /api/auth`
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::get_current_user)
            .service(handlers::auth::login),
    );
}

/// 프로필, 경력, 학력, GitHub
///
/// 고정 경로(`/me`, `/user/..`, `/github/..`)를 빈 경로보다 먼저 등록합니다.
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
            .service(handlers::profiles::get_my_profile)
            .service(handlers::profiles::get_profile_by_user_id)
            .service(handlers::profiles::get_github_repos)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::delete_experience)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::delete_education)
            .service(handlers::profiles::get_all_profiles)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::delete_account),
    );
}

/// JSON 본문 추출 설정
///
/// 잘못된 JSON 본문은 400 `{"msg": ...}`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("API Running")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "devconnector_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "features": { "database": "MongoDB", "dependency_injection": "Singleton Macro" }
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
