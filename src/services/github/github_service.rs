//! GitHub 저장소 조회 서비스
//!
//! 프로필의 GitHub 사용자명으로 최근 저장소 5개를 조회하여 응답 본문을 그대로 전달합니다.

use reqwest::header::{ACCEPT, USER_AGENT};
use singleton_macro::service;
use std::time::Duration;

use crate::config::GithubConfig;
use crate::core::errors::AppError;

pub const NO_GITHUB_PROFILE_MESSAGE: &str = "No Github profile found";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API 클라이언트 서비스
///
/// `reqwest::Client`는 내부 커넥션 풀을 가지므로 싱글톤 하나를 공유합니다.
#[service(name = "github")]
pub struct GithubService {
    client: reqwest::Client,
}

impl GithubService {
    /// 사용자의 저장소 목록을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - GitHub이 2xx 이외의 상태로 응답한 경우
    /// * `AppError::ExternalServiceError` - 네트워크 오류 또는 응답 파싱 실패
    pub async fn get_repositories(&self, username: &str) -> Result<serde_json::Value, AppError> {
        self.get_repositories_from(&GithubConfig::api_url(), username).await
    }

    pub async fn get_repositories_from(
        &self,
        base_url: &str,
        username: &str,
    ) -> Result<serde_json::Value, AppError> {
        let mut request = self
            .client
            .get(repos_url(base_url, username))
            .header(USER_AGENT, GithubConfig::user_agent())
            .header(ACCEPT, "application/vnd.github+json")
            .timeout(REQUEST_TIMEOUT);

        if let Some(token) = GithubConfig::token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GitHub 저장소 조회 실패: {} ({})", username, status);
            return Err(AppError::NotFound(NO_GITHUB_PROFILE_MESSAGE.to_string()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 응답 파싱 실패: {}", e)))
    }
}

/// 저장소 목록 URL (생성일 오름차순, 5개)
pub fn repos_url(base_url: &str, username: &str) -> String {
    format!(
        "{}/users/{}/repos?per_page=5&sort=created&direction=asc",
        base_url.trim_end_matches('/'),
        urlencoding::encode(username.trim())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url() {
        assert_eq!(
            repos_url("https://api.github.com", "octocat"),
            "https://api.github.com/users/octocat/repos?per_page=5&sort=created&direction=asc"
        );
    }

    #[test]
    fn test_repos_url_encodes_username() {
        let url = repos_url("https://api.github.com/", " bad/name ");
        assert!(url.starts_with("https://api.github.com/users/bad%2Fname/repos"));
    }
}
