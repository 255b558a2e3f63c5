//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Front-end)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - ID 파싱, DTO 변환, NotFound 규칙
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 단일 문서 연산
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<SongService>`로 주입됩니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(SongService::new(repo)))
//!     .configure(configure_all_routes)
//! ```

pub mod songs;
