//! 곡 관리 서비스 모듈
//!
//! [`SongService`](song_service::SongService)는 리포지토리를 주입받아
//! 라우터의 각 연산을 수행합니다.

pub mod song_service;

pub use song_service::*;
