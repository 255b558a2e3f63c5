//! 곡 투표 서비스 백엔드
//!
//! 곡(제목, 작곡가, 가사, 득표수)과 곡 문서에 내장된 댓글을 관리하는
//! MongoDB 기반 REST 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /songs, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← ID 파싱, NotFound 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 단일 문서 연산
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← songs 컬렉션
//! └─────────────────┘
//! ```
//!
//! 시드 스크립트(`src/bin/seed.rs`)는 라우터를 거치지 않고 같은 연결과
//! 리포지토리를 사용합니다.

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod seed;
