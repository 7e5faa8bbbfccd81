//! DevConnector 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use devconnector_backend::config::{CorsConfig, Environment, JwtConfig, ServerConfig};
use devconnector_backend::core::registry::ServiceLocator;
use devconnector_backend::db::Database;
use devconnector_backend::middlewares::AUTH_HEADER;
use devconnector_backend::repositories::profiles::ProfileRepository;
use devconnector_backend::repositories::users::UserRepository;
use devconnector_backend::routes::{configure_all_routes, json_config};
use devconnector_backend::utils::display_terminal::print_server_ready;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 DevConnector 백엔드 시작중... (환경: {:?})", Environment::current());

    install_jwt_config()?;

    // 데이터 스토어 초기화
    let database = initialize_database().await?;
    ServiceLocator::set(database);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    ensure_indexes().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그, JSON 본문 에러 처리를 포함합니다.
async fn start_http_server() -> io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();
    let allowed_origins = CorsConfig::allowed_origins();

    print_server_ready(
        &host,
        port,
        &[
            ("POST", "/api/users"),
            ("GET|POST", "/api/auth"),
            ("GET|POST|DELETE", "/api/profile"),
            ("PUT", "/api/profile/experience"),
            ("PUT", "/api/profile/education"),
            ("GET", "/api/profile/github/{username}"),
        ],
    );

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .app_data(json_config())
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 남긴다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 토큰 서명 설정을 한 번 읽어 전역으로 고정합니다
fn install_jwt_config() -> io::Result<()> {
    let config = JwtConfig::from_env();

    if !config.can_sign() {
        warn!("⚠️ JWT_SECRET이 설정되지 않았습니다. 토큰 발급과 검증이 모두 실패합니다");
    }

    JwtConfig::install(config).map_err(io::Error::other)?;
    info!("🔐 JWT 설정 완료 (만료: {}초)", JwtConfig::global().expiration_seconds);
    Ok(())
}

/// MongoDB 연결을 초기화합니다
async fn initialize_database() -> io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        io::Error::other(format!("데이터베이스 연결 실패: {}", e))
    })?;

    Ok(Arc::new(database))
}

/// 고유 인덱스를 보장합니다 (`users.email`, `profiles.user`)
async fn ensure_indexes() -> io::Result<()> {
    UserRepository::instance()
        .create_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    ProfileRepository::instance()
        .create_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    info!("📇 인덱스 확인 완료");
    Ok(())
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS` (콤마 구분, 기본값 `http://localhost:3000`)에 나열된
/// Origin만 허용하며, 인증 헤더 `x-auth-token`을 허용 헤더에 포함합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .allowed_header(header::HeaderName::from_static(AUTH_HEADER))
        .max_age(3600)
}
