//! 직원 관련 요청 DTO
//!
//! 로그인, 직원 등록, 페이지 조회 요청을 매핑합니다.
//! 관리자 프론트엔드가 camelCase JSON을 사용하므로 필드명을 맞춰 둡니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

/// 한 번에 조회하는 최대 건수. 더 큰 `pageSize`는 이 값으로 줄여서 조회합니다.
pub const MAX_PAGE_SIZE: u64 = 100;

/// 직원 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeLoginRequest {
    #[validate(length(min = 1, message = "아이디를 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 직원 등록 요청 DTO
///
/// 비밀번호는 받지 않습니다. 새 계정에는 기본 비밀번호가 설정됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// 등록 시에는 무시됩니다
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "아이디는 1-32자 사이여야 합니다"))]
    pub username: String,

    #[validate(length(min = 1, max = 32, message = "이름은 1-32자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 11, message = "전화번호는 1-11자 사이여야 합니다"))]
    #[validate(custom(function = "validate_digits"))]
    pub phone: String,

    /// "1": 남, "0": 여
    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(length(min = 1, max = 18, message = "신분증 번호는 1-18자 사이여야 합니다"))]
    pub id_number: String,
}

/// 직원 페이지 조회 쿼리
///
/// `GET /admin/employee/page?page=1&pageSize=10&name=张` 형태로 전달됩니다.
/// 빈 `name`은 필터 없음으로 취급합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    pub page: u64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "pageSize는 1 이상이어야 합니다"))]
    pub page_size: u64,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

impl EmployeePageQuery {
    /// 실제 조회 건수 (`MAX_PAGE_SIZE` 이하)
    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_PAGE_SIZE)
    }

    /// 건너뛸 문서 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }
}

impl Default for EmployeePageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            name: None,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

/// 숫자만 허용
fn validate_digits(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_phone")
            .with_message("전화번호는 숫자만 입력할 수 있습니다".into()));
    }
    Ok(())
}

fn validate_sex(value: &str) -> Result<(), ValidationError> {
    if value != "0" && value != "1" {
        return Err(ValidationError::new("invalid_sex")
            .with_message("성별 값이 올바르지 않습니다".into()));
    }
    Ok(())
}
