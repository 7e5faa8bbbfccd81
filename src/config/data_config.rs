//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 비밀번호 해싱, GitHub API, CORS 관련 설정을 관리합니다.

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

/// 실행 환경 (`ENVIRONMENT`, 없으면 `NODE_ENV`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    /// 값이 없거나 알 수 없으면 이 환경으로 간주
    Production,
}

impl Environment {
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Self::parse_lenient(&value))
            .unwrap_or(Environment::Production)
    }

    /// 대소문자와 약어(`dev`, `stage` 등)를 허용하여 해석합니다.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "stage" | "staging" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(value))
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt 해싱 cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| Self::parse_cost(&v))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 문자열 cost 값을 검증합니다.
    pub fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 5000
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// GitHub API 설정
pub struct GithubConfig;

impl GithubConfig {
    /// GitHub API 기본 URL
    pub fn api_url() -> String {
        env::var("GITHUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "https://api.github.com".to_string())
    }

    /// 선택적 GitHub 개인 액세스 토큰
    ///
    /// 설정되면 요청 한도 완화를 위해 Authorization 헤더로 전송됩니다.
    pub fn token() -> Option<String> {
        env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty())
    }

    /// GitHub API가 요구하는 User-Agent 값
    pub fn user_agent() -> String {
        env::var("GITHUB_USER_AGENT").unwrap_or_else(|_| "devconnector-backend".to_string())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 콤마 구분)
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| Self::parse_origins(&v))
            .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()])
    }

    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing_is_lenient() {
        let cases = [
            ("DEV", Environment::Development),
            (" development ", Environment::Development),
            ("testing", Environment::Test),
            ("stage", Environment::Staging),
            ("prod", Environment::Production),
            ("", Environment::Production),
        ];

        for (raw, expected) in cases {
            assert_eq!(raw.parse::<Environment>(), Ok(expected), "input {:?}", raw);
        }
    }

    #[test]
    fn test_bcrypt_cost_grows_toward_production() {
        let costs: Vec<u32> = [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ]
        .iter()
        .map(PasswordConfig::bcrypt_cost_for_env)
        .collect();

        assert_eq!(costs, vec![4, 4, 10, 12]);
    }

    #[test]
    fn test_parse_cost_bounds() {
        assert_eq!(PasswordConfig::parse_cost("10"), Some(10));
        assert_eq!(PasswordConfig::parse_cost(" 4 "), Some(4));
        assert_eq!(PasswordConfig::parse_cost("3"), None);
        assert_eq!(PasswordConfig::parse_cost("16"), None);
        assert_eq!(PasswordConfig::parse_cost("abc"), None);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            CorsConfig::parse_origins("http://a.com, http://b.com,,"),
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
    }
}
