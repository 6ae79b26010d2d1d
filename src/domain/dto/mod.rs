//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── employee/           # 직원 관련 DTO
//! │   ├── request.rs      # 로그인, 등록, 페이지 조회 요청
//! │   └── response.rs     # 로그인 결과, 목록 항목
//! └── response.rs         # 공통 응답 봉투(ApiResponse), PageResult
//! ```
//!
//! ## 응답 형식
//!
//! 모든 응답은 다음 봉투에 담깁니다:
//!
//! ```json
//! { "code": 1, "data": { "total": 1, "records": [ ... ] }, "message": null }
//! ```

pub mod employee;
pub mod response;

pub use employee::*;
pub use response::{ApiResponse, PageResult};
