//! 에러 처리 모듈
//!
//! [`errors::AppError`]가 전역 에러 변환 계층 역할을 합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
