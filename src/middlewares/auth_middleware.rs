//! 인증 게이트 미들웨어
//!
//! 보호된 라우트 앞에서 `x-auth-token` 헤더의 JWT를 검증합니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 | 401 `{"msg": "No token, auth failed"}` |
//! | 서명 불일치 / 만료 / 형식 오류 | 401 `{"msg": "Token is not valid"}` |
//! | 유효 | `AuthenticatedUser`를 request extensions에 넣고 다음 서비스 호출 |
//!
//! ```rust,ignore
//! #[get("/me", wrap = "AuthMiddleware::required()")]
//! pub async fn get_my_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> { ... }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::JwtConfig;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    /// 지정하지 않으면 전역 `JwtConfig`를 사용
    config: Option<Arc<JwtConfig>>,
}

impl AuthMiddleware {
    /// 토큰이 반드시 필요한 라우트용
    pub fn required() -> Self {
        Self { config: None }
    }

    /// 특정 서명 설정으로 검증하는 게이트
    pub fn with_config(config: JwtConfig) -> Self {
        Self {
            config: Some(Arc::new(config)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::middlewares::auth_inner::AUTH_HEADER;
    use crate::services::auth::TokenService;
    use actix_web::http::header::HeaderValue;
    use actix_web::{test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;

    fn config() -> JwtConfig {
        JwtConfig::new("middleware-test-secret", 3600)
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    macro_rules! gated_app {
        () => {
            test::init_service(
                App::new().service(
                    web::resource("/protected")
                        .wrap(AuthMiddleware::with_config(config()))
                        .route(web::get().to(whoami)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected() {
        let app = gated_app!();
        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "msg": "No token, auth failed" }));
    }

    #[actix_web::test]
    async fn test_tampered_token_is_rejected() {
        let app = gated_app!();
        let token = TokenService::instance()
            .issue_token_with(&config(), &ObjectId::new().to_hex())
            .unwrap();
        let tampered = format!("{}tampered", token);

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTH_HEADER, tampered))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "msg": "Token is not valid" }));
    }

    #[actix_web::test]
    async fn test_unreadable_or_blank_token_is_invalid_not_missing() {
        let app = gated_app!();

        let values = vec![
            HeaderValue::from_bytes(b"abc\xe9def").unwrap(),
            HeaderValue::from_static("   "),
        ];

        for value in values {
            let req = test::TestRequest::get()
                .uri("/protected")
                .insert_header((AUTH_HEADER, value))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status().as_u16(), 401);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body, serde_json::json!({ "msg": "Token is not valid" }));
        }
    }

    #[actix_web::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let app = gated_app!();
        let token = TokenService::instance()
            .issue_token_with(&JwtConfig::new("other", 3600), &ObjectId::new().to_hex())
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTH_HEADER, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_exposes_user_id() {
        let app = gated_app!();
        let user_id = ObjectId::new().to_hex();
        let token = TokenService::instance()
            .issue_token_with(&config(), &user_id)
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTH_HEADER, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, user_id.as_bytes());
    }

    #[actix_web::test]
    async fn test_non_object_id_subject_is_rejected() {
        let app = gated_app!();
        let token = TokenService::instance()
            .issue_token_with(&config(), "not-an-object-id")
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTH_HEADER, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
    }
}
