use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use mongodb::bson::oid::ObjectId;

use crate::config::JwtConfig;
use crate::core::AppError;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::token_service::{TokenService, INVALID_TOKEN_MESSAGE};

/// 토큰을 싣는 요청 헤더
pub const AUTH_HEADER: &str = "x-auth-token";

pub const NO_TOKEN_MESSAGE: &str = "No token, auth failed";

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub config: Option<Arc<JwtConfig>>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();

        Box::pin(async move {
            match authenticate(&req, config.as_deref()) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `x-auth-token` 헤더의 토큰을 검증하여 사용자 식별 정보를 만듭니다.
fn authenticate(
    req: &ServiceRequest,
    config: Option<&JwtConfig>,
) -> Result<AuthenticatedUser, AppError> {
    let invalid = || AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string());

    let header = req
        .headers()
        .get(AUTH_HEADER)
        .ok_or_else(|| AppError::AuthenticationError(NO_TOKEN_MESSAGE.to_string()))?;

    // 헤더가 있으면 읽을 수 없거나 비어 있어도 검증 실패로 처리
    let token = header
        .to_str()
        .map(str::trim)
        .ok()
        .filter(|t| !t.is_empty())
        .ok_or_else(invalid)?;

    let token_service = TokenService::instance();
    let claims = match config {
        Some(config) => token_service.verify_token_with(config, token)?,
        None => token_service.verify_token(token)?,
    };

    // 서명은 맞지만 ObjectId가 아닌 ID는 이 서버가 발급한 토큰이 아니다
    if ObjectId::parse_str(&claims.user.id).is_err() {
        return Err(invalid());
    }

    Ok(AuthenticatedUser::new(claims.user.id))
}
