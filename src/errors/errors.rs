//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 관리자 API 전체의 에러를 하나의 열거형으로 모으고,
//! `actix_web::ResponseError` 구현을 통해 공통 응답 봉투(`ApiResponse`)로 변환합니다.
//! 핸들러는 에러를 직접 잡지 않고 `?`로 전파하기만 하면 됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError` / `InternalError` | 500 Internal Server Error |
//!
//! 응답 본문은 항상 실패 봉투입니다:
//!
//! ```json
//! { "code": 0, "data": null, "message": "계정이 존재하지 않습니다" }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<(), AppError> {
//!     if !self.repo.update_status(id, status, DateTime::now()).await? {
//!         return Err(AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", id)));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::dto::response::ApiResponse;

/// 내부 오류를 클라이언트에 노출할 때 사용하는 고정 메시지
const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층에서 발생할 수 있는 모든 실패를 포괄합니다.
/// 자동으로 실패 봉투 형태의 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 존재하지 않는 계정, 비밀번호 불일치, 잠긴 계정, 잘못된 토큰에 사용됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 실패 봉투의 `message` 필드에 들어갈 사용자용 메시지
    ///
    /// 인프라 계층 에러는 상세 내용을 숨기고 고정 메시지를 사용합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 실패 봉투를 담은 HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        } else {
            log::warn!("요청 거부: {}", self);
        }

        HttpResponse::build(status).json(ApiResponse::<()>::error(self.client_message()))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_duplicate_key(&error) {
            return AppError::ConflictError("이미 존재하는 데이터입니다".to_string());
        }
        AppError::DatabaseError(error.to_string())
    }
}

/// 쓰기 에러가 유니크 인덱스 위반인지 확인
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
