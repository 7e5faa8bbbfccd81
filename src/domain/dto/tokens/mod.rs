//! 토큰 응답 DTO

pub mod response;

pub use response::TokenResponse;
