//! 공통 응답 봉투와 페이지 결과
//!
//! 모든 관리자 API는 성공/실패와 관계없이 [`ApiResponse`] 하나를 반환합니다.
use serde::{Deserialize, Serialize};

/// 성공 응답 코드
pub const SUCCESS_CODE: i32 = 1;
/// 실패 응답 코드
pub const FAILURE_CODE: i32 = 0;

/// 공통 응답 봉투
///
/// 와이어 형태는 항상 `{"code", "data", "message"}` 세 필드를 가지며,
/// 값이 없는 필드는 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 페이로드를 담은 성공 응답
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            message: None,
        }
    }

    /// 페이로드 없는 성공 응답
    pub fn success_empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            data: None,
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ApiResponse<()> {
    /// 메시지를 담은 실패 응답
    pub fn error(message: String) -> Self {
        ApiResponse {
            code: FAILURE_CODE,
            data: None,
            message: Some(message),
        }
    }
}

/// 페이지 조회 결과
///
/// `total`은 필터에 일치하는 전체 건수이고, `records`는 요청한 페이지의 항목입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub total: u64,
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(total: u64, records: Vec<T>) -> Self {
        Self { total, records }
    }
}
