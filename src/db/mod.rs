//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::name()).await?;
//! let repo = MongoEmployeeRepository::new(&database);
//! ```

use mongodb::{Client, options::ClientOptions};
use log::debug;

use crate::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `Client`는 내부적으로 연결 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // 모니터링 및 로깅에서 연결 출처 식별용
        client_options.app_name = Some("sky_admin_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        debug!("MongoDB ping 응답 확인: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
