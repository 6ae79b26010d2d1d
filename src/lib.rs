//! 스카이 테이크아웃 관리자 직원 서비스
//!
//! 관리자 화면에서 사용하는 직원 계정 관리 API입니다.
//! 로그인 시 JWT를 발급하고, 직원 등록/목록 조회/계정 잠금을 제공합니다.
//!
//! # Features
//!
//! - **직원 로그인**: bcrypt 비밀번호 검증, HS256 관리자 토큰 발급
//! - **직원 관리**: 등록 (기본 비밀번호), 이름 검색 페이지 조회, 활성/잠금
//! - **공통 응답 봉투**: `{code, data, message}` 형식으로 성공/실패 통일
//! - **생성자 주입**: 전역 레지스트리 없이 `Arc`로 의존성 연결
//! - **MongoDB**: 직원 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /admin/employee
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← EmployeeController
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← EmployeeService, TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← EmployeeRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sky_admin_service::handlers::EmployeeController;
//! use sky_admin_service::repositories::employee::MongoEmployeeRepository;
//! use sky_admin_service::services::employee::EmployeeServiceImpl;
//!
//! let repo = Arc::new(MongoEmployeeRepository::new(&database));
//! let service = Arc::new(EmployeeServiceImpl::new(repo, bcrypt_cost));
//! let controller = EmployeeController::new(service, jwt_properties);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
