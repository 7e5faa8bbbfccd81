//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 인스턴스 관리
//! - 자동 의존성 주입 (`db: Arc<Database>`)
//! - 드라이버 에러를 `AppError`로 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

pub mod profiles;
pub mod users;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 고유 인덱스 위반 여부
pub(crate) fn is_duplicate_key_error(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
