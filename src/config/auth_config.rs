//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 설정을 관리합니다. 서명 비밀키와 만료 시간은 서버 시작 시
//! 환경 변수에서 한 번 읽어 프로세스 전역 `OnceCell`에 설치되며,
//! 이후 요청 처리 경로에서는 잠금 없이 읽기만 수행합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="360000"   # 기본값 100시간
//! ```

use once_cell::sync::OnceCell;
use std::env;

use super::Environment;

/// 토큰 기본 유효 기간 (초)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 360_000;

/// 개발/테스트 환경 전용 기본 비밀키
const DEV_FALLBACK_SECRET: &str = "dev-only-jwt-secret";

static JWT_CONFIG: OnceCell<JwtConfig> = OnceCell::new();

/// JWT 서명 설정
///
/// 불변 값으로 취급되며, 한 번 설치된 뒤에는 변경되지 않습니다.
///
/// # 비밀키 기본값
///
/// `JWT_SECRET`이 없으면 개발/테스트 환경에서는 고정된 개발용 키를 사용하고,
/// 스테이징/프로덕션에서는 빈 문자열이 되어 토큰 발급이 500 에러로 실패합니다.
/// 안전하지 않은 키로 조용히 서명하는 일이 없도록 하기 위함입니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::config::JwtConfig;
///
/// // main.rs
/// JwtConfig::install(JwtConfig::from_env())?;
///
/// // 요청 처리 중
/// let config = JwtConfig::global();
/// println!("토큰 유효 기간: {}초", config.expiration_seconds);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,

    /// 토큰 유효 기간 (초)
    pub expiration_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
        }
    }

    /// 환경 변수에서 설정을 읽어 생성합니다.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            Self::fallback_secret(&Environment::current()).to_string()
        });

        let expiration_seconds = env::var("JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_EXPIRATION_SECONDS);

        Self::new(secret, expiration_seconds)
    }

    /// 비밀키가 있어 토큰 발급과 검증이 가능한지 여부
    pub fn can_sign(&self) -> bool {
        !self.secret.is_empty()
    }

    /// `JWT_SECRET` 미설정 시 환경별 대체 비밀키
    pub fn fallback_secret(environment: &Environment) -> &'static str {
        match environment {
            Environment::Development | Environment::Test => {
                log::warn!("JWT_SECRET not set, using development secret (not secure for production!)");
                DEV_FALLBACK_SECRET
            }
            Environment::Staging | Environment::Production => {
                log::error!("JWT_SECRET not set, token issuance will fail");
                ""
            }
        }
    }

    /// 프로세스 전역 설정으로 설치합니다.
    ///
    /// 이미 설치된 경우 에러 메시지를 반환합니다.
    pub fn install(config: JwtConfig) -> Result<(), String> {
        JWT_CONFIG
            .set(config)
            .map_err(|_| "JWT configuration already installed".to_string())
    }

    /// 전역 설정을 반환합니다.
    ///
    /// 설치 전에 호출되면 환경 변수에서 읽어 설치합니다.
    pub fn global() -> &'static JwtConfig {
        JWT_CONFIG.get_or_init(JwtConfig::from_env)
    }
}
