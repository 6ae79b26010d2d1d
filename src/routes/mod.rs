//! # HTTP 라우트 구성
//!
//! 애플리케이션의 모든 엔드포인트를 등록합니다.
//!
//! ```text
//! /health                       상태 확인
//! /admin/employee               직원 관리 (로그인, 로그아웃, 등록, 목록, 상태 변경)
//! ```
//!
//! 요청 본문/쿼리/경로 추출 실패도 `AppError::ValidationError`로 바꿔
//! 다른 오류와 같은 응답 봉투로 내려보냅니다.

use crate::errors::AppError;
use crate::handlers;
use actix_web::{error, web, HttpRequest};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_employee_routes(cfg);
}

fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/employee")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(handlers::employee::login)
            .service(handlers::employee::logout)
            .service(handlers::employee::save)
            .service(handlers::employee::page)
            .service(handlers::employee::start_or_stop)
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError(format!("요청 본문 형식이 올바르지 않습니다: {}", err)).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파싱 실패: {}", err);
    AppError::ValidationError(format!("쿼리 파라미터가 올바르지 않습니다: {}", err)).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("경로 파싱 실패: {}", err);
    AppError::ValidationError(format!("경로 파라미터가 올바르지 않습니다: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sky_admin_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT (HS256)"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "sky_admin_service");
    }
}
