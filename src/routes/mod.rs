//! API 라우트 설정 모듈
//!
//! 곡 컬렉션 라우트와 헬스체크 엔드포인트를 등록합니다.
//! 인증 미들웨어나 요청 제한은 적용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(song_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_song_routes(cfg);
}

/// 곡 관련 라우트를 설정합니다
///
/// 고정 세그먼트(`/comment`, `/clean` 등)를 가진 라우트와 `/{song_id}` 라우트는
/// 세그먼트 수가 달라 서로 가리지 않습니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/songs \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Tizita","author":"Mahmoud Ahmed"}'
///
/// curl -X PUT http://localhost:8080/songs/65f1c0a2e4b0a1b2c3d4e5f6/comment \
///   -H "Content-Type: application/json" \
///   -d '{"comment":"nice"}'
/// ```
fn configure_song_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/songs")
            .service(handlers::songs::list_songs)
            .service(handlers::songs::create_song)
            .service(handlers::songs::get_song)
            .service(handlers::songs::update_song)
            .service(handlers::songs::delete_song)
            .service(handlers::songs::add_comment)
            .service(handlers::songs::remove_comment)
            .service(handlers::songs::clear_comments)
            .service(handlers::songs::pop_top_comment)
            .service(handlers::songs::pop_bottom_comment)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스 상태는 확인하지 않고 프로세스 응답 여부만 보여줍니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "konjo_songs",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "konjo_songs",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
