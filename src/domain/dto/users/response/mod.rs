//! # 사용자 관련 응답 DTO 모듈
//!
//! 민감한 정보(비밀번호 해시)를 제외하고 클라이언트에 전달할 형태로 변환합니다.
//! ObjectId는 16진수 문자열, 날짜는 RFC 3339 문자열로 직렬화됩니다.

pub mod user_response;

pub use user_response::UserResponse;
