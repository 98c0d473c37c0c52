//! 커피숍 메뉴 서비스 진입점
//!
//! MongoDB/Redis 연결과 싱글톤 레지스트리를 준비한 뒤 Actix-web 서버를 띄웁니다.
//! 모든 API는 Auth0 발급 토큰의 RS256 검증을 전제로 동작합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use coffee_shop_backend::caching::redis::RedisClient;
use coffee_shop_backend::config::{Auth0Config, EnvironmentConfig, ServerConfig};
use coffee_shop_backend::core::registry::ServiceLocator;
use coffee_shop_backend::db::Database;
use coffee_shop_backend::repositories::drinks::drink_repo::DrinkRepository;
use coffee_shop_backend::routes::configure_all_routes;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 커피숍 메뉴 서비스 시작중...");

    // 환경 설정 레코드는 첫 접근 시 한 번 구성된다
    let env_config = EnvironmentConfig::get();
    info!(
        "⚙️ 환경 설정 로드 완료 (production: {}, api: {})",
        env_config.production, env_config.api_server_url
    );

    let (database, redis_client) = initialize_data_stores().await;

    // 인프라 핸들을 레지스트리에 먼저 심은 뒤 나머지를 초기화
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화 실패");

    // title 유니크 인덱스가 없으면 중복 검사가 레이스에 뚫린다
    if let Err(e) = DrinkRepository::instance().create_indexes().await {
        error!("❌ 인덱스 생성 실패: {}", e);
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting → CORS → 액세스 로그 → 경로 정규화 순으로 미들웨어를
/// 쌓고, 기능별 라우트를 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 메뉴 목록: http://{}/drinks", bind_address);

    let (per_second, burst_size) = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        per_second, burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// PROFILE 환경변수에 맞는 .env 파일을 로드합니다
///
/// * `PROFILE=dev` → `.env.dev` (기본값)
/// * `PROFILE=prod` → `.env.prod`
/// * 그 외 → 기본 `.env`
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(name) => match dotenv::from_filename(name) {
            Ok(_) => info!("{} 파일 로드 됨 (profile: {})", name, profile),
            Err(e) => error!("{} 파일 로드 실패: {}", name, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드 (profile: {})", profile);
        }
    }
}

/// 로깅 필터를 초기화합니다
///
/// `RUST_LOG`가 없으면 info 레벨, actix_web만 debug 레벨로 둡니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// 두 저장소 모두 연결 확인(ping)까지 끝낸 핸들을 반환하며,
/// 어느 한쪽이라도 실패하면 프로세스를 종료합니다.
async fn initialize_data_stores() -> (Arc<Database>, Arc<RedisClient>) {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));
    let redis_client = Arc::new(RedisClient::new().await.expect("Redis 연결 실패"));

    (database, redis_client)
}

/// CORS 설정을 구성합니다
///
/// 허용 origin은 환경 설정 레코드의 콜백 URL과 로컬 프론트엔드 개발
/// 서버(`localhost:4200` / `127.0.0.1:4200`)입니다. Authorization 헤더를
/// 포함한 인증 요청을 허용합니다.
fn configure_cors() -> Cors {
    let callback_url = Auth0Config::callback_url();

    Cors::default()
        .allowed_origin(&callback_url)
        .allowed_origin("http://localhost:4200")
        .allowed_origin("http://127.0.0.1:4200")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// Rate Limiting 파라미터를 환경변수에서 읽습니다
///
/// `RATE_LIMIT_PER_SECOND`(기본 100)와 `RATE_LIMIT_BURST_SIZE`(기본 200)를
/// 반환합니다. 파싱에 실패하면 기본값으로 되돌아갑니다.
fn load_rate_limit_config() -> (u64, u32) {
    fn env_number<T: std::str::FromStr>(key: &str, default: T) -> T {
        match std::env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                error!("{} 파싱 실패: '{}'. 기본값 사용", key, raw);
                default
            }),
            Err(_) => default,
        }
    }

    let per_second = env_number("RATE_LIMIT_PER_SECOND", 100u64);
    let burst_size = env_number("RATE_LIMIT_BURST_SIZE", 200u32);

    (per_second, burst_size)
}
