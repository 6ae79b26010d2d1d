//! 인증 토큰 서비스 모듈
//!
//! 관리자 로그인 성공 시 발급하는 JWT를 생성/검증합니다.
//! 서버 측 세션이나 토큰 폐기 목록은 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenService, EMP_ID};
//!
//! let claims = TokenService::parse_token(&props.admin_secret_key, &token)?;
//! let employee_id = claims.get(EMP_ID);
//! ```

pub mod token_service;

pub use token_service::*;
