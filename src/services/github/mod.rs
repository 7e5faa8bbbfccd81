//! GitHub 연동 서비스 모듈

pub mod github_service;

pub use github_service::GithubService;
