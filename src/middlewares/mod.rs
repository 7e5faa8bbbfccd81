//! HTTP 미들웨어
//!
//! - [`auth_middleware`] - `x-auth-token` JWT 인증 게이트

pub mod auth_middleware;
mod auth_inner;

pub use auth_inner::{AUTH_HEADER, NO_TOKEN_MESSAGE};
pub use auth_middleware::AuthMiddleware;
