//! HTTP 요청 핸들러 모듈
//!
//! 각 핸들러는 요청 추출과 로깅을 담당하고, 처리는 주입된 컨트롤러에 위임합니다.
//! 오류는 `?`로 전파되어 `AppError`의 `ResponseError` 구현이 응답으로 변환합니다.

pub mod employee;

pub use employee::EmployeeController;
