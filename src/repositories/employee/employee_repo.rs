//! # 직원 리포지토리 구현
//!
//! 직원 엔티티의 데이터 액세스 계층입니다.
//! 서비스는 [`EmployeeRepository`] trait에만 의존하며, 운영 환경에서는 MongoDB 구현
//! [`MongoEmployeeRepository`]가 주입됩니다.
//!
//! ## 저장 구조
//!
//! - **컬렉션명**: `employee`
//! - **키**: 정수형 `_id`, `counters` 컬렉션의 `{_id: "employee"}` 문서를 `$inc`하여 할당
//! - **인덱스**: username(unique), create_time(desc)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::employee::{Employee, EmployeeStatus};
use crate::errors::AppError;
use crate::utils::string_utils::escape_regex;

const EMPLOYEE_COLLECTION: &str = "employee";
const COUNTER_COLLECTION: &str = "counters";
const EMPLOYEE_SEQUENCE: &str = "employee";

/// 직원 데이터 액세스 추상화
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 로그인 아이디로 직원 조회
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError>;

    /// 새 직원을 저장하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 username이 이미 존재하는 경우
    async fn insert(&self, employee: Employee) -> Result<Employee, AppError>;

    /// 이름 부분 일치 필터로 한 페이지를 조회합니다.
    ///
    /// 생성 시각 내림차순으로 정렬하며, 전체 일치 건수와 페이지 항목을 함께 반환합니다.
    async fn find_page(
        &self,
        name: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<(u64, Vec<Employee>), AppError>;

    /// 상태를 절대값으로 설정합니다. 대상 문서가 있었으면 `true`.
    async fn update_status(
        &self,
        id: i64,
        status: EmployeeStatus,
        updated_at: DateTime,
    ) -> Result<bool, AppError>;
}

/// MongoDB 기반 직원 리포지토리
#[derive(Clone)]
pub struct MongoEmployeeRepository {
    employees: Collection<Employee>,
    counters: Collection<Document>,
}

impl MongoEmployeeRepository {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();
        Self {
            employees: db.collection::<Employee>(EMPLOYEE_COLLECTION),
            counters: db.collection::<Document>(COUNTER_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let create_time_index = IndexModel::builder()
            .keys(doc! { "create_time": -1 })
            .options(IndexOptions::builder()
                .name("create_time_desc".to_string())
                .build())
            .build();

        self.employees
            .create_indexes([username_index, create_time_index])
            .await?;

        Ok(())
    }

    /// 다음 직원 ID를 원자적으로 할당합니다.
    async fn next_id(&self) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": EMPLOYEE_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("직원 ID 시퀀스를 할당하지 못했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("직원 ID 시퀀스 형식 오류: {}", e)))
    }
}

/// 이름 부분 일치 필터 문서
fn name_filter(name: Option<&str>) -> Document {
    match name {
        Some(name) => doc! { "name": { "$regex": escape_regex(name) } },
        None => doc! {},
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        Ok(self.employees
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn insert(&self, mut employee: Employee) -> Result<Employee, AppError> {
        if self.find_by_username(&employee.username).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 존재하는 사용자명입니다: {}",
                employee.username
            )));
        }

        employee.id = self.next_id().await?;

        // 동시 등록 경합은 유니크 인덱스가 ConflictError로 걸러낸다
        self.employees.insert_one(&employee).await?;

        Ok(employee)
    }

    async fn find_page(
        &self,
        name: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<(u64, Vec<Employee>), AppError> {
        let filter = name_filter(name);

        let total = self.employees.count_documents(filter.clone()).await?;

        let records: Vec<Employee> = self.employees
            .find(filter)
            .sort(doc! { "create_time": -1, "_id": -1 })
            .skip(skip)
            .limit(limit as i64)
            .await?
            .try_collect()
            .await?;

        Ok((total, records))
    }

    async fn update_status(
        &self,
        id: i64,
        status: EmployeeStatus,
        updated_at: DateTime,
    ) -> Result<bool, AppError> {
        let result = self.employees
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status.code(), "update_time": updated_at } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
