use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// 인증 게이트를 통과한 요청의 사용자 식별 정보
///
/// `AuthMiddleware`가 토큰 검증 후 request extensions에 넣어 두며,
/// 핸들러는 인자로 선언하기만 하면 꺼내 쓸 수 있습니다.
///
/// ```rust,ignore
/// #[get("/me", wrap = "AuthMiddleware::required()")]
/// pub async fn get_my_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
///     let profile = ProfileService::instance().get_my_profile(&user.user_id).await?;
///     Ok(HttpResponse::Ok().json(profile))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// ObjectId로 변환합니다.
    ///
    /// 서명은 유효하지만 형식이 맞지 않는 ID는 유효하지 않은 토큰으로 취급합니다.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::AuthenticationError("Token is not valid".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "No token, auth failed".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new("abc"));

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, "abc");
    }

    #[actix_web::test]
    async fn test_missing_extension_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_object_id_conversion() {
        let id = ObjectId::new();
        assert_eq!(AuthenticatedUser::new(id.to_hex()).object_id().unwrap(), id);
        assert!(AuthenticatedUser::new("not-an-id").object_id().is_err());
    }
}
