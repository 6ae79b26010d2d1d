//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 엔티티를 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 키 |
//! |--------|--------|----|
//! | [`employee::Employee`] | `employee` | 정수형 `_id` (시퀀스) |

pub mod employee;

pub use employee::{Employee, EmployeeStatus};
