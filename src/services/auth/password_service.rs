//! 비밀번호 해싱 서비스
//!
//! bcrypt로 비밀번호를 해싱하고 검증합니다. 매 해싱마다 새 salt가 생성되므로
//! 같은 비밀번호라도 해시 값은 매번 달라집니다.
//!
//! bcrypt는 의도적으로 느린 연산이므로 요청 처리 중에는 `*_blocking` 메서드로
//! actix 블로킹 스레드 풀에서 실행합니다.

use actix_web::error::BlockingError;
use actix_web::web;
use bcrypt::{hash, verify};
use singleton_macro::service;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;

/// 비밀번호 해싱 서비스
#[service(name = "password")]
pub struct PasswordService {
    // 외부 의존성 없음
}

impl PasswordService {
    /// 설정된 cost로 비밀번호를 해싱합니다.
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AppError> {
        self.hash_password_with_cost(plaintext, PasswordConfig::bcrypt_cost())
    }

    pub fn hash_password_with_cost(&self, plaintext: &str, cost: u32) -> Result<String, AppError> {
        hash(plaintext, cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 비밀번호를 검증합니다.
    ///
    /// 저장된 해시 형식이 잘못된 경우에도 에러 대신 `false`를 반환합니다.
    pub fn verify_password(&self, plaintext: &str, hashed: &str) -> bool {
        match verify(plaintext, hashed) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("⚠️ 저장된 비밀번호 해시 검증 실패: {}", e);
                false
            }
        }
    }

    /// 블로킹 스레드 풀에서 해싱합니다.
    pub async fn hash_password_blocking(&self, plaintext: String) -> Result<String, AppError> {
        let service = Self::instance();

        web::block(move || service.hash_password(&plaintext))
            .await
            .map_err(blocking_pool_error)?
    }

    /// 블로킹 스레드 풀에서 검증합니다.
    ///
    /// 저장된 해시가 잘못된 경우는 `Ok(false)`, 스레드 풀 자체의 실패는 `InternalError`입니다.
    pub async fn verify_password_blocking(
        &self,
        plaintext: String,
        hashed: String,
    ) -> Result<bool, AppError> {
        let service = Self::instance();

        web::block(move || service.verify_password(&plaintext, &hashed))
            .await
            .map_err(blocking_pool_error)
    }
}

fn blocking_pool_error(e: BlockingError) -> AppError {
    AppError::InternalError(format!("블로킹 작업 실패: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let service = PasswordService::instance();
        let hashed = service.hash_password_with_cost("secret123", TEST_COST).unwrap();

        assert_ne!(hashed, "secret123");
        assert!(service.verify_password("secret123", &hashed));
        assert!(!service.verify_password("secret124", &hashed));
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let service = PasswordService::instance();
        let first = service.hash_password_with_cost("secret123", TEST_COST).unwrap();
        let second = service.hash_password_with_cost("secret123", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(service.verify_password("secret123", &first));
        assert!(service.verify_password("secret123", &second));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        let service = PasswordService::instance();
        assert!(!service.verify_password("secret123", "not-a-bcrypt-hash"));
        assert!(!service.verify_password("secret123", ""));
    }

    #[actix_web::test]
    async fn test_blocking_variants() {
        let service = PasswordService::instance();
        let hashed = service.hash_password_with_cost("secret123", TEST_COST).unwrap();

        assert!(service
            .verify_password_blocking("secret123".to_string(), hashed.clone())
            .await
            .unwrap());
        assert!(!service
            .verify_password_blocking("wrong".to_string(), hashed)
            .await
            .unwrap());

        let rehashed = service
            .hash_password_blocking("secret123".to_string())
            .await
            .unwrap();
        assert!(service.verify_password("secret123", &rehashed));
    }

    #[actix_web::test]
    async fn test_blocking_verify_fails_closed_only_on_bad_hash() {
        let service = PasswordService::instance();

        let result = service
            .verify_password_blocking("secret123".to_string(), "not-a-bcrypt-hash".to_string())
            .await;
        assert!(matches!(result, Ok(false)));
    }

    #[test]
    fn test_blocking_pool_failure_is_server_error() {
        let error = blocking_pool_error(BlockingError);
        assert!(matches!(error, AppError::InternalError(_)));
        assert!(error.is_server_error());
    }
}
