//! # 직원 관리 서비스 구현
//!
//! 직원 계정의 로그인 검증, 등록, 목록 조회, 활성/잠금 처리를 담당합니다.
//! 핸들러는 [`EmployeeService`] trait에만 의존하고, 운영 환경에서는
//! [`EmployeeServiceImpl`]이 생성자 주입으로 연결됩니다.
//!
//! ## 로그인 검증 순서
//!
//! 1. 아이디로 계정 조회 (없으면 "계정이 존재하지 않습니다")
//! 2. bcrypt 비밀번호 검증 (불일치 시 "비밀번호가 올바르지 않습니다")
//! 3. 계정 상태 확인 (잠금 시 "계정이 잠겨 있습니다")

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::DateTime;
use validator::Validate;

use crate::domain::dto::employee::{
    EmployeeLoginRequest, EmployeePageQuery, EmployeeRequest, EmployeeResponse,
};
use crate::domain::dto::response::PageResult;
use crate::domain::entities::employee::{Employee, EmployeeStatus};
use crate::errors::{AppError, ErrorContext};
use crate::repositories::employee::EmployeeRepository;
use crate::utils::string_utils::validate_required_string;

/// 새 직원 계정의 기본 비밀번호
pub const DEFAULT_PASSWORD: &str = "123456";

/// 직원 관리 비즈니스 로직
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// 아이디/비밀번호를 검증하고 직원 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계정 없음, 비밀번호 불일치, 잠긴 계정
    async fn login(&self, request: EmployeeLoginRequest) -> Result<Employee, AppError>;

    /// 새 직원을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 아이디 중복
    async fn save(&self, request: EmployeeRequest) -> Result<(), AppError>;

    /// 이름 부분 일치로 직원 목록을 페이지 단위로 조회합니다.
    async fn page_query(
        &self,
        query: EmployeePageQuery,
    ) -> Result<PageResult<EmployeeResponse>, AppError>;

    /// 직원 계정 상태를 설정합니다. 같은 값으로 반복 호출해도 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 직원이 없음
    async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<(), AppError>;
}

/// 리포지토리 기반 기본 구현
pub struct EmployeeServiceImpl {
    employee_repo: Arc<dyn EmployeeRepository>,
    bcrypt_cost: u32,
}

impl EmployeeServiceImpl {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, bcrypt_cost: u32) -> Self {
        Self {
            employee_repo,
            bcrypt_cost,
        }
    }
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    async fn login(&self, request: EmployeeLoginRequest) -> Result<Employee, AppError> {
        request.validate()?;

        // 등록 시 아이디를 trim 해서 저장하므로 조회도 같은 기준으로 한다
        let username = request.username.trim();

        let employee = self.employee_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("계정이 존재하지 않습니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(&request.password, &employee.password)
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("비밀번호 불일치 - 아이디: {}", username);
            return Err(AppError::AuthenticationError("비밀번호가 올바르지 않습니다".to_string()));
        }

        if !employee.is_enabled() {
            log::warn!("잠긴 계정 로그인 시도 - 아이디: {}", username);
            return Err(AppError::AuthenticationError("계정이 잠겨 있습니다".to_string()));
        }

        Ok(employee)
    }

    async fn save(&self, request: EmployeeRequest) -> Result<(), AppError> {
        request.validate()?;

        let username = validate_required_string(&request.username, "username")?;
        let name = validate_required_string(&request.name, "name")?;

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(DEFAULT_PASSWORD, self.bcrypt_cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.bcrypt_cost))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let employee = Employee::new(
            username,
            name,
            password_hash,
            request.phone,
            request.sex,
            request.id_number,
        );

        let created = self.employee_repo.insert(employee).await?;
        log::info!("직원 등록 완료 - ID: {}, 아이디: {}", created.id, created.username);

        Ok(())
    }

    async fn page_query(
        &self,
        query: EmployeePageQuery,
    ) -> Result<PageResult<EmployeeResponse>, AppError> {
        query.validate()?;

        let (total, employees) = self.employee_repo
            .find_page(query.name.as_deref(), query.offset(), query.limit())
            .await?;

        let records = employees.into_iter().map(EmployeeResponse::from).collect();

        Ok(PageResult::new(total, records))
    }

    async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<(), AppError> {
        let matched = self.employee_repo
            .update_status(id, status, DateTime::now())
            .await?;

        if !matched {
            return Err(AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", id)));
        }

        Ok(())
    }
}
