//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 싱글톤 레지스트리 없이 생성자로 의존성을 받아 구성됩니다.
//!
//! # Features
//!
//! - 직원 로그인 검증, 등록, 목록 조회, 계정 상태 변경
//! - 관리자 범위 JWT 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, employee::EmployeeServiceImpl};
//!
//! let service = EmployeeServiceImpl::new(repo, bcrypt_cost);
//! let token = TokenService::create_token(&secret, ttl, claims)?;
//! ```

pub mod employee;
pub mod auth;
