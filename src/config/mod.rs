//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 관리하는 모듈입니다.
//! 설정은 `main`에서 한 번 읽어서 각 구성 요소의 생성자로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, bcrypt 설정
//! - [`auth_config`] - 관리자 JWT 설정 ([`JwtProperties`])
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="sky_take_out"
//!
//! # JWT 설정
//! export JWT_ADMIN_SECRET_KEY="your-admin-secret"
//! export JWT_ADMIN_TTL="7200000"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
