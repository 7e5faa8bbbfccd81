//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱, GitHub, CORS 설정
//! - [`auth_config`] - JWT 서명 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 기본값을 제공합니다.
//! `PROFILE` 환경 변수로 `.env.dev` / `.env.prod` 파일을 선택합니다.
//!
//! ### 2. 보안 우선
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본 비밀키는 개발/테스트 환경에서만 사용
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//!
//! JwtConfig::install(JwtConfig::from_env())?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="devconnector"
//!
//! # JWT
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="360000"
//!
//! # 선택
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export GITHUB_TOKEN="ghp_..."
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
