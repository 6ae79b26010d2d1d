//! Employee Entity Implementation
//!
//! 백오피스 직원 계정 엔티티입니다. MongoDB `employee` 컬렉션의 문서와 1:1로 매핑되며,
//! 정수형 `_id`는 리포지토리가 시퀀스 카운터로 할당합니다.

use std::fmt;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 직원 계정 상태
///
/// 와이어와 저장소 모두 정수(`0`/`1`)로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum EmployeeStatus {
    /// 잠긴 계정 (로그인 불가)
    Disabled,
    /// 정상 계정
    Enabled,
}

impl EmployeeStatus {
    pub fn code(self) -> i32 {
        match self {
            EmployeeStatus::Disabled => 0,
            EmployeeStatus::Enabled => 1,
        }
    }
}

impl TryFrom<i32> for EmployeeStatus {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EmployeeStatus::Disabled),
            1 => Ok(EmployeeStatus::Enabled),
            other => Err(AppError::ValidationError(format!(
                "알 수 없는 계정 상태입니다: {}",
                other
            ))),
        }
    }
}

impl From<EmployeeStatus> for i32 {
    fn from(status: EmployeeStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 직원 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// 직원 ID (저장 전에는 0)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 로그인 아이디 (unique)
    pub username: String,
    /// 이름
    pub name: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    pub phone: String,
    /// 성별 ("1": 남, "0": 여)
    pub sex: String,
    /// 신분증 번호
    pub id_number: String,
    pub status: EmployeeStatus,
    pub create_time: DateTime,
    pub update_time: DateTime,
}

impl Employee {
    /// 아직 저장되지 않은 새 직원을 생성합니다.
    ///
    /// 새 계정은 항상 활성 상태로 시작합니다.
    pub fn new(
        username: String,
        name: String,
        password_hash: String,
        phone: String,
        sex: String,
        id_number: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: 0,
            username,
            name,
            password: password_hash,
            phone,
            sex,
            id_number,
            status: EmployeeStatus::Enabled,
            create_time: now,
            update_time: now,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == EmployeeStatus::Enabled
    }
}
