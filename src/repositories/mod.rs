//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 리포지토리 trait에만 의존하고, 구현체는 `main`에서 생성하여 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::employee::{EmployeeRepository, MongoEmployeeRepository};
//!
//! let repo: Arc<dyn EmployeeRepository> = Arc::new(MongoEmployeeRepository::new(&database));
//! let admin = repo.find_by_username("admin").await?;
//! ```

pub mod employee;
