//! # Domain Layer Module
//!
//! 직원 관리 도메인의 엔티티와 데이터 전송 객체를 정의하는 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 매핑되는 엔티티 (Employee)
//! └── dto/          ← 요청/응답 DTO와 공통 응답 봉투
//! ```
//!
//! 엔티티는 서비스/리포지토리 계층 밖으로 나가지 않습니다.
//! 핸들러는 항상 DTO를 [`dto::response::ApiResponse`]에 담아 반환합니다.

pub mod entities;
pub mod dto;

pub use entities::{Employee, EmployeeStatus};
pub use dto::{ApiResponse, PageResult};
