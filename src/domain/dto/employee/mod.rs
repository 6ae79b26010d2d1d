//! 직원 도메인 요청/응답 DTO 모듈

pub mod request;
pub mod response;

pub use request::{EmployeeLoginRequest, EmployeePageQuery, EmployeeRequest};
pub use response::{EmployeeLoginResponse, EmployeeResponse};
