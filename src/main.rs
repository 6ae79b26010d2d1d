use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::{dotenv};
use env_logger::Env;
use log::{error, info};
use sky_admin_service::config::{DatabaseConfig, JwtProperties, PasswordConfig, ServerConfig};
use sky_admin_service::db::Database;
use sky_admin_service::errors::AppError;
use sky_admin_service::handlers::EmployeeController;
use sky_admin_service::repositories::employee::MongoEmployeeRepository;
use sky_admin_service::routes::configure_all_routes;
use sky_admin_service::services::employee::EmployeeServiceImpl;

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 관리자 직원 서비스 시작중...");

    let controller = build_controller().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(controller)).await
}

/// 설정을 읽고 리포지토리, 서비스, 컨트롤러를 차례로 연결합니다.
async fn build_controller() -> Result<EmployeeController, AppError> {
    let jwt_properties = JwtProperties::from_env()?;
    info!("JWT 설정 로드됨: {:?}", jwt_properties);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::name()).await?;
    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let employee_repo = Arc::new(MongoEmployeeRepository::new(&database));
    employee_repo.create_indexes().await?;

    let employee_service = Arc::new(EmployeeServiceImpl::new(
        employee_repo,
        PasswordConfig::bcrypt_cost(),
    ));

    Ok(EmployeeController::new(employee_service, jwt_properties))
}

async fn start_http_server(controller: web::Data<EmployeeController>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Admin API: http://{}/admin/employee", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(controller.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:8888")
        .allowed_origin("http://127.0.0.1:8888")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("token"),
        ])

        .supports_credentials()

        .max_age(3600)
}

fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
