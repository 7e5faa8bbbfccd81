//! JWT 토큰 발급/검증 서비스 구현
//!
//! HS256 서명의 무상태 액세스 토큰을 발급하고 검증합니다.
//! 리프레시, 토큰 순환, 폐기 목록은 없으며 토큰은 만료 시각까지 유효합니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// 유효하지 않은 토큰에 대한 공통 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";

/// JWT 토큰 관리 서비스
///
/// 서명 설정은 서버 시작 시 설치된 [`JwtConfig::global`]을 사용합니다.
/// `_with` 접미사가 붙은 메서드는 설정을 직접 받으며 테스트에서 사용합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자 ID로 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 비밀키가 비어 있거나 서명에 실패한 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::instance().issue_token(&user_id)?;
    /// ```
    pub fn issue_token(&self, user_id: &str) -> Result<String, AppError> {
        self.issue_token_with(JwtConfig::global(), user_id)
    }

    pub fn issue_token_with(&self, config: &JwtConfig, user_id: &str) -> Result<String, AppError> {
        if !config.can_sign() {
            return Err(AppError::InternalError(
                "JWT secret is not configured".to_string(),
            ));
        }

        let claims = TokenClaims::new(user_id, Utc::now().timestamp(), config.expiration_seconds);
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 서명 불일치, 만료, 형식 오류 모두 같은 `AuthenticationError`로 응답하며
    /// 상세 원인은 debug 로그로만 남깁니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_token_with(JwtConfig::global(), token)
    }

    pub fn verify_token_with(&self, config: &JwtConfig, token: &str) -> Result<TokenClaims, AppError> {
        let invalid = || AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string());

        if !config.can_sign() {
            log::error!("JWT secret is not configured, rejecting token");
            return Err(invalid());
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                invalid()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_then_verify_returns_user_id() {
        let service = TokenService::instance();
        let token = service.issue_token_with(&config(), "507f1f77bcf86cd799439011").unwrap();

        let claims = service.verify_token_with(&config(), &token).unwrap();
        assert_eq!(claims.user.id, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let service = TokenService::instance();
        let token = service.issue_token_with(&config(), "user").unwrap();

        let other = JwtConfig::new("another-secret", 3600);
        match service.verify_token_with(&other, &token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_TOKEN_MESSAGE),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::instance();
        let expired = JwtConfig::new("test-secret", -10);
        let token = service.issue_token_with(&expired, "user").unwrap();

        assert!(matches!(
            service.verify_token_with(&config(), &token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = TokenService::instance();
        let token = service.issue_token_with(&config(), "user").unwrap();
        let tampered = format!("{}x", token);

        assert!(service.verify_token_with(&config(), &tampered).is_err());
        assert!(service.verify_token_with(&config(), "not.a.token").is_err());
    }

    #[test]
    fn test_empty_secret_fails_issuance() {
        let service = TokenService::instance();
        let empty = JwtConfig::new("", 3600);

        assert!(matches!(
            service.issue_token_with(&empty, "user"),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_claims_shape() {
        let service = TokenService::instance();
        let token = service.issue_token_with(&config(), "abc").unwrap();

        // header.payload.signature
        let payload = token.split('.').nth(1).unwrap();
        assert!(!payload.is_empty());

        let claims = service.verify_token_with(&config(), &token).unwrap();
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user"]["id"], "abc");
        assert!(json.get("iat").is_some());
        assert!(json.get("exp").is_some());
    }
}
