//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 정규식 이스케이프
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{escape_regex, validate_required_string};
//!
//! let username = validate_required_string("  zhangsan  ", "username")?;
//! let pattern = escape_regex("张.");
//! ```

pub mod string_utils;
