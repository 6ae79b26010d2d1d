//! 직원 관련 응답 DTO
use serde::{Deserialize, Serialize};

use mongodb::bson::DateTime;

use crate::domain::entities::employee::{Employee, EmployeeStatus};

/// 로그인 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLoginResponse {
    pub id: i64,
    pub user_name: String,
    pub name: String,
    /// 관리자 범위 JWT
    pub token: String,
}

/// 직원 목록의 한 항목
///
/// 비밀번호 해시를 제외한 직원 정보입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub sex: String,
    pub id_number: String,
    pub status: EmployeeStatus,
    /// RFC 3339 문자열
    pub create_time: String,
    pub update_time: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            username: employee.username,
            name: employee.name,
            phone: employee.phone,
            sex: employee.sex,
            id_number: employee.id_number,
            status: employee.status,
            create_time: format_timestamp(employee.id, employee.create_time),
            update_time: format_timestamp(employee.id, employee.update_time),
        }
    }
}

/// RFC 3339로 표현할 수 없는 시각은 빈 문자열로 내려보냅니다.
fn format_timestamp(employee_id: i64, time: DateTime) -> String {
    time.try_to_rfc3339_string().unwrap_or_else(|e| {
        log::warn!("직원 {} 시각 변환 실패 ({}): {}", employee_id, time.timestamp_millis(), e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_response_hides_password() {
        let mut employee = Employee::new(
            "wangwu".to_string(),
            "王五".to_string(),
            "$2b$04$secret".to_string(),
            "13700000000".to_string(),
            "1".to_string(),
            "110101198803031234".to_string(),
        );
        employee.id = 3;

        let value = serde_json::to_value(EmployeeResponse::from(employee)).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["idNumber"], "110101198803031234");
        assert_eq!(value["status"], 1);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_out_of_range_timestamp_becomes_empty() {
        assert_eq!(format_timestamp(1, DateTime::MAX), "");
        assert_eq!(
            format_timestamp(1, DateTime::from_millis(0)),
            "1970-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_login_response_uses_user_name_key() {
        let response = EmployeeLoginResponse {
            id: 1,
            user_name: "admin".to_string(),
            name: "管理员".to_string(),
            token: "jwt".to_string(),
        };

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["userName"], "admin");
        assert_eq!(value["token"], "jwt");
    }
}
