//! 곡 투표 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 기동 시 MongoDB에 한 번 연결하고, 그 연결을 프로세스가 끝날 때까지
//! 모든 요청 핸들러가 공유합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info, warn};
use konjo_songs::config::{Environment, ServerConfig, init_logging, load_env_file};
use konjo_songs::db::Database;
use konjo_songs::repositories::songs::MongoSongRepository;
use konjo_songs::routes::configure_all_routes;
use konjo_songs::services::songs::SongService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 곡 투표 서비스 시작중...");

    let database = initialize_database().await;

    let song_repo = MongoSongRepository::new(database);
    if let Err(e) = song_repo.create_indexes().await {
        warn!("votes 인덱스 생성 실패 (계속 진행): {}", e);
    }

    let song_service = web::Data::new(SongService::new(Arc::new(song_repo)));

    start_http_server(song_service).await
}

/// MongoDB 연결을 초기화합니다
///
/// 배포 모드에 따라 대상을 선택합니다. 연결에 실패하면 재시도 없이 종료합니다.
async fn initialize_database() -> Arc<Database> {
    let environment = Environment::current();
    info!("📡 데이터베이스 연결 중... ({})", environment.label());

    match Database::connect(&environment).await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("데이터베이스 연결 실패: {}", e);
            std::process::exit(1);
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(song_service: web::Data<SongService>) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);
    info!("📍 Songs: http://{}:{}/songs", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(song_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 개발 서버에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
