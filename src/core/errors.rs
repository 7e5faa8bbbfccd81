//! # Application Error Handling System
//!
//! 백엔드 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 HTTP 응답까지 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"errors": [{"msg", "param"}]}` |
//! | `ConflictError` | 400 Bad Request | `{"errors": [{"msg"}]}` |
//! | `InvalidCredentials` | 400 Bad Request | `{"errors": [{"msg": "Invalid Credentials"}]}` |
//! | `BadRequest` | 400 Bad Request | `{"msg": ...}` |
//! | `AuthenticationError` | 401 Unauthorized | `{"msg": ...}` |
//! | `NotFound` | 404 Not Found | `{"msg": ...}` |
//! | `DatabaseError` | 500 Internal Server Error | `{"msg": "Server error"}` |
//! | `ExternalServiceError` | 500 Internal Server Error | `{"msg": "Server error"}` |
//! | `InternalError` | 500 Internal Server Error | `{"msg": "Server error"}` |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 기록되고 클라이언트에는
//! 일반화된 메시지만 전달됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_user(&self, id: &str) -> Result<User, AppError> {
//!     self.user_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// 클라이언트에 노출되는 5xx 공통 메시지
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// 로그인 실패 시 공통 메시지
///
/// 이메일이 없는 경우와 비밀번호가 틀린 경우 모두 동일한 메시지를 사용하여
/// 계정 존재 여부가 노출되지 않도록 합니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials";

/// 필드 단위 검증 에러 항목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// 사용자에게 보여줄 메시지
    pub msg: String,

    /// 문제가 된 요청 필드명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
        }
    }

    /// 특정 필드에 속하지 않는 메시지
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 각 계층(리포지토리, 서비스, 핸들러)에서 발생하는 모든 에러를 포괄합니다.
///
/// ## 에러 카테고리
///
/// ### 1. 입력 계층 에러 (400)
/// - `ValidationError`: 요청 본문 필드 검증 실패
/// - `ConflictError`: 중복 데이터 생성 시도 (이미 가입된 이메일 등)
/// - `InvalidCredentials`: 로그인 정보 불일치
/// - `BadRequest`: 그 밖의 잘못된 요청 (프로필 없음 등)
///
/// ### 2. 보안 계층 에러 (401)
/// - `AuthenticationError`: 토큰 누락, 위조, 만료
///
/// ### 3. 리소스 에러 (404)
/// - `NotFound`: 요청한 리소스 없음
///
/// ### 4. 인프라/시스템 에러 (500)
/// - `DatabaseError`, `ExternalServiceError`, `InternalError`
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 오류, 쿼리 실행 오류 등을 나타냅니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// `validator` 크레이트의 검증 결과를 필드 단위 목록으로 보관합니다.
    #[error("Validation error: {}", format_field_errors(.0))]
    ValidationError(Vec<FieldError>),

    /// 충돌/중복 에러
    ///
    /// 원본 API와의 호환을 위해 409가 아닌 400으로 응답하며,
    /// 검증 에러와 같은 `errors` 배열 형식을 사용합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 정보 불일치
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 일반적인 잘못된 요청
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 인증 실패 에러 (토큰 누락, 위조, 만료)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 외부 서비스 에러
    ///
    /// GitHub API 등 써드파티 호출 실패 시 발생합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 토큰 서명 실패, 비밀번호 해싱 실패 등 예상하지 못한 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| match &e.param {
            Some(param) => format!("{}: {}", param, e.msg),
            None => e.msg.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 단일 필드 검증 에러 생성
    pub fn field(param: &str, msg: &str) -> Self {
        AppError::ValidationError(vec![FieldError::new(param, msg)])
    }

    /// 서버 내부 에러 여부
    ///
    /// `true`이면 응답 본문은 `Server error`로 일반화되고 상세 내용은 error 로그로 남습니다.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_)
                | AppError::ExternalServiceError(_)
                | AppError::InternalError(_)
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// `validator` 검증 결과를 필드 단위 에러 목록으로 변환합니다.
    ///
    /// 필드명 기준으로 정렬하여 응답 순서가 항상 동일하도록 합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(|err| {
                        let msg = err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {}", field));
                        FieldError::new(field.clone(), msg)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        field_errors.sort_by(|a, b| a.param.cmp(&b.param));
        AppError::ValidationError(field_errors)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::InvalidCredentials
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 내용을 로그로 남기고 일반화된 메시지만 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_server_error() {
            log::error!("{}", self);
            return actix_web::HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "msg": SERVER_ERROR_MESSAGE }));
        }

        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!({ "errors": errors }),
            AppError::ConflictError(msg) => serde_json::json!({
                "errors": [FieldError::message(msg.as_str())]
            }),
            AppError::InvalidCredentials => serde_json::json!({
                "errors": [FieldError::message(INVALID_CREDENTIALS_MESSAGE)]
            }),
            AppError::BadRequest(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg) => serde_json::json!({ "msg": msg }),
            _ => serde_json::json!({ "msg": SERVER_ERROR_MESSAGE }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// let bson = mongodb::bson::to_bson(&experience)
///     .context("Failed to encode experience")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
