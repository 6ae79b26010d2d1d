//! # Employee Admin HTTP Handlers
//!
//! 관리자 화면의 직원 관리 엔드포인트를 처리합니다.
//! 모든 응답은 [`ApiResponse`] 봉투에 담기며, 실패는 `AppError`의
//! `ResponseError` 구현이 같은 봉투 형식으로 변환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/admin/employee/login` | 로그인, JWT 발급 |
//! | `POST` | `/admin/employee/logout` | 로그아웃 (서버 상태 없음) |
//! | `POST` | `/admin/employee` | 직원 등록 |
//! | `GET` | `/admin/employee/page` | 직원 목록 페이지 조회 |
//! | `POST` | `/admin/employee/status/{status}?id=` | 계정 활성/잠금 |
//!
//! ## 구성
//!
//! 비즈니스 로직은 [`EmployeeController`]에 모여 있고, actix 핸들러 함수는
//! 요청 추출과 로깅만 담당합니다. 컨트롤러는 시작 시 한 번 생성되어
//! `web::Data`로 공유됩니다.
//!
//! ```rust,ignore
//! let controller = web::Data::new(EmployeeController::new(service, jwt_properties));
//!
//! App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes)
//! ```

use std::sync::Arc;

use actix_web::{web, HttpResponse, get, post};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::JwtProperties;
use crate::domain::dto::employee::{
    EmployeeLoginRequest, EmployeeLoginResponse, EmployeePageQuery, EmployeeRequest,
    EmployeeResponse,
};
use crate::domain::dto::response::{ApiResponse, PageResult};
use crate::domain::entities::employee::EmployeeStatus;
use crate::errors::AppError;
use crate::services::auth::{TokenService, EMP_ID};
use crate::services::employee::EmployeeService;

/// 직원 관리 컨트롤러
///
/// 서비스와 JWT 설정을 생성자로 받아 보관합니다.
pub struct EmployeeController {
    employee_service: Arc<dyn EmployeeService>,
    jwt_properties: JwtProperties,
}

impl EmployeeController {
    pub fn new(employee_service: Arc<dyn EmployeeService>, jwt_properties: JwtProperties) -> Self {
        Self {
            employee_service,
            jwt_properties,
        }
    }

    /// 로그인 후 `empId` 클레임을 담은 관리자 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계정 없음, 비밀번호 불일치, 잠긴 계정
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub async fn login(
        &self,
        request: EmployeeLoginRequest,
    ) -> Result<ApiResponse<EmployeeLoginResponse>, AppError> {
        let employee = self.employee_service.login(request).await?;

        let mut claims = Map::new();
        claims.insert(EMP_ID.to_string(), Value::from(employee.id));

        let token = TokenService::create_token(
            &self.jwt_properties.admin_secret_key,
            self.jwt_properties.admin_ttl,
            claims,
        )?;

        Ok(ApiResponse::success(EmployeeLoginResponse {
            id: employee.id,
            user_name: employee.username,
            name: employee.name,
            token,
        }))
    }

    /// 서버 측에 세션이 없으므로 항상 성공합니다.
    /// 발급된 토큰은 만료 시각까지 유효합니다.
    pub async fn logout(&self) -> ApiResponse<()> {
        ApiResponse::success_empty()
    }

    pub async fn save(&self, request: EmployeeRequest) -> Result<ApiResponse<()>, AppError> {
        self.employee_service.save(request).await?;
        Ok(ApiResponse::success_empty())
    }

    pub async fn page(
        &self,
        query: EmployeePageQuery,
    ) -> Result<ApiResponse<PageResult<EmployeeResponse>>, AppError> {
        let result = self.employee_service.page_query(query).await?;
        Ok(ApiResponse::success(result))
    }

    pub async fn start_or_stop(
        &self,
        status: EmployeeStatus,
        id: i64,
    ) -> Result<ApiResponse<()>, AppError> {
        self.employee_service.start_or_stop(status, id).await?;
        Ok(ApiResponse::success_empty())
    }
}

/// 상태 변경 대상 직원 ID (`?id=`)
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub id: i64,
}

/// 직원 로그인 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "username": "admin", "password": "123456" }
/// ```
///
/// # 응답
///
/// ```json
/// {
///   "code": 1,
///   "data": { "id": 1, "userName": "admin", "name": "管理员", "token": "eyJ..." },
///   "message": null
/// }
/// ```
///
/// 인증 실패 시 401과 함께 `{"code": 0, "data": null, "message": "..."}`를 반환합니다.
#[post("/login")]
pub async fn login(
    controller: web::Data<EmployeeController>,
    payload: web::Json<EmployeeLoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("직원 로그인 요청 - 아이디: {}", payload.username);

    let response = controller.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/logout")]
pub async fn logout(controller: web::Data<EmployeeController>) -> HttpResponse {
    log::info!("직원 로그아웃");

    HttpResponse::Ok().json(controller.logout().await)
}

/// 직원 등록 핸들러
///
/// 새 계정은 기본 비밀번호와 활성 상태로 생성됩니다.
/// 아이디가 이미 있으면 409를 반환합니다.
#[post("")]
pub async fn save(
    controller: web::Data<EmployeeController>,
    payload: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("직원 등록 요청 - 아이디: {}", payload.username);

    let response = controller.save(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 직원 목록 페이지 조회
///
/// `GET /admin/employee/page?page=1&pageSize=10&name=张`
#[get("/page")]
pub async fn page(
    controller: web::Data<EmployeeController>,
    query: web::Query<EmployeePageQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("직원 목록 조회 - {:?}", query);

    let response = controller.page(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 계정 활성/잠금 핸들러
///
/// 상태는 경로에서, 직원 ID는 쿼리 문자열에서 받습니다.
/// `0`은 잠금, `1`은 활성이며 그 외 값은 400입니다.
#[post("/status/{status}")]
pub async fn start_or_stop(
    controller: web::Data<EmployeeController>,
    status: web::Path<i32>,
    query: web::Query<StatusQuery>,
) -> Result<HttpResponse, AppError> {
    let status = EmployeeStatus::try_from(status.into_inner())?;
    log::info!("직원 계정 상태 변경 - ID: {}, 상태: {}", query.id, status);

    let response = controller.start_or_stop(status, query.id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    use crate::domain::entities::employee::Employee;
    use crate::routes::configure_all_routes;

    const SECRET: &str = "test-admin-secret";

    /// 호출 기록을 남기는 서비스 목
    #[derive(Default)]
    struct RecordingEmployeeService {
        saved: Mutex<Vec<EmployeeRequest>>,
        queries: Mutex<Vec<EmployeePageQuery>>,
        status_calls: Mutex<Vec<(EmployeeStatus, i64)>>,
    }

    fn admin() -> Employee {
        let mut employee = Employee::new(
            "admin".to_string(),
            "管理员".to_string(),
            "hash".to_string(),
            "13812312312".to_string(),
            "1".to_string(),
            "110101199001010047".to_string(),
        );
        employee.id = 1;
        employee
    }

    #[async_trait]
    impl EmployeeService for RecordingEmployeeService {
        async fn login(&self, request: EmployeeLoginRequest) -> Result<Employee, AppError> {
            if request.username == "admin" && request.password == "123456" {
                Ok(admin())
            } else {
                Err(AppError::AuthenticationError("비밀번호가 올바르지 않습니다".to_string()))
            }
        }

        async fn save(&self, request: EmployeeRequest) -> Result<(), AppError> {
            self.saved.lock().unwrap().push(request);
            Ok(())
        }

        async fn page_query(
            &self,
            query: EmployeePageQuery,
        ) -> Result<PageResult<EmployeeResponse>, AppError> {
            let records = std::iter::repeat_with(|| EmployeeResponse::from(admin()))
                .take(query.page_size.min(3) as usize)
                .collect();
            self.queries.lock().unwrap().push(query);
            Ok(PageResult::new(42, records))
        }

        async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<(), AppError> {
            if id == 404 {
                return Err(AppError::NotFound(format!("직원을 찾을 수 없습니다: {}", id)));
            }
            self.status_calls.lock().unwrap().push((status, id));
            Ok(())
        }
    }

    fn controller(service: Arc<RecordingEmployeeService>) -> web::Data<EmployeeController> {
        web::Data::new(EmployeeController::new(
            service,
            JwtProperties::new(SECRET, 7_200_000),
        ))
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(controller($service.clone()))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_login_success_issues_token() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee/login")
            .set_json(json!({ "username": "admin", "password": "123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["userName"], "admin");
        assert_eq!(body["data"]["name"], "管理员");

        let token = body["data"]["token"].as_str().unwrap();
        let claims = TokenService::parse_token(SECRET, token).unwrap();
        assert_eq!(claims.get(EMP_ID), Some(&json!(1)));
    }

    #[actix_web::test]
    async fn test_login_failure_has_no_token() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee/login")
            .set_json(json!({ "username": "admin", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "비밀번호가 올바르지 않습니다");
    }

    #[actix_web::test]
    async fn test_logout_always_succeeds() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post().uri("/admin/employee/logout").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["code"], 1);
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_save_delegates_once() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee")
            .set_json(json!({
                "username": "zhangsan",
                "name": "张三",
                "phone": "13800000000",
                "sex": "1",
                "idNumber": "110101199001011234"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 1);

        let saved = service.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].username, "zhangsan");
        assert_eq!(saved[0].name, "张三");
        assert_eq!(saved[0].id_number, "110101199001011234");
    }

    #[actix_web::test]
    async fn test_save_malformed_json_is_envelope() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert!(service.saved.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_page_passes_query_and_wraps_result() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::get()
            .uri("/admin/employee/page?page=1&pageSize=10")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["code"], 1);
        assert_eq!(body["data"]["total"], 42);
        assert!(body["data"]["records"].as_array().unwrap().len() <= 10);

        let queries = service.queries.lock().unwrap();
        assert_eq!(queries[0], EmployeePageQuery { page: 1, page_size: 10, name: None });
    }

    #[actix_web::test]
    async fn test_status_binds_path_and_query() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/admin/employee/status/0?id=5")
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["code"], 1);
        }

        let calls = service.status_calls.lock().unwrap();
        assert_eq!(*calls, vec![(EmployeeStatus::Disabled, 5), (EmployeeStatus::Disabled, 5)]);
    }

    #[actix_web::test]
    async fn test_status_rejects_unknown_value() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee/status/7?id=5")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(service.status_calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_status_unknown_id_is_not_found() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/admin/employee/status/1?id=404")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["message"], "직원을 찾을 수 없습니다: 404");
    }

    #[actix_web::test]
    async fn test_status_missing_id_is_bad_request() {
        let service = Arc::new(RecordingEmployeeService::default());
        let app = app!(service);

        let req = test::TestRequest::post().uri("/admin/employee/status/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
