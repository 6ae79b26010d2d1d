//! 직원 관리 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::employee::{EmployeeService, EmployeeServiceImpl};
//!
//! let service: Arc<dyn EmployeeService> =
//!     Arc::new(EmployeeServiceImpl::new(employee_repo, PasswordConfig::bcrypt_cost()));
//! let employee = service.login(request).await?;
//! ```

pub mod employee_service;

pub use employee_service::{EmployeeService, EmployeeServiceImpl, DEFAULT_PASSWORD};
