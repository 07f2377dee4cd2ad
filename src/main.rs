//! 사용자 생성 폼 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 데이터 저장소 없이
//! 폼 초안을 메모리에 보관하며 검증/정규화 API를 제공합니다.

use std::io;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info};
use user_form_service::config::{CorsConfig, RateLimitConfig, ServerConfig};
use user_form_service::core::registry;
use user_form_service::routes::{configure_all_routes, ROUTES};
use user_form_service::services::forms::FormService;
use user_form_service::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_route, print_step_complete, print_step_start,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 파일 로드 후 로깅 초기화, 로드 결과는 로거가 준비된 뒤 기록
    let env_file = load_env_file();
    init_logging();
    log_env_file(&env_file);

    info!("🚀 사용자 생성 폼 서비스 시작중...");

    print_boxed_title("USER FORM SERVICE");
    let services = registry::initialize_all();
    let limits = FormService::instance().limits();
    info!(
        "📝 폼 초안 한도: {}개, 보관 {}분",
        limits.max_drafts,
        limits.draft_ttl.num_minutes()
    );
    print_routes();
    print_final_summary(services, ROUTES.len());

    // HTTP 서버 시작
    start_http_server().await
}

fn print_routes() {
    print_step_start(2, "라우트 등록");
    for (method, path) in ROUTES {
        print_route(method, path);
    }
    print_step_complete(2, "라우트 등록", ROUTES.len());
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("🔓 CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 로드할 환경 파일과 그 결과
struct EnvFile {
    profile: Option<String>,
    file_name: &'static str,
    result: Result<(), dotenv::Error>,
}

/// `PROFILE`에 맞는 환경 파일 이름 (`dev`/`prod`, 그 외나 미설정은 `.env`)
fn profile_env_file(profile: Option<&str>) -> &'static str {
    match profile {
        Some("prod") => ".env.prod",
        Some("dev") => ".env.dev",
        _ => ".env",
    }
}

fn load_env_file() -> EnvFile {
    let profile = std::env::var("PROFILE").ok();
    let file_name = profile_env_file(profile.as_deref());
    let result = dotenv::from_filename(file_name).map(|_| ());

    EnvFile { profile, file_name, result }
}

fn log_env_file(env_file: &EnvFile) {
    info!("Current profile: {}", env_file.profile.as_deref().unwrap_or("(unset)"));

    match &env_file.result {
        Ok(()) => info!("{} 파일 로드 됨", env_file.file_name),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file.file_name, e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
