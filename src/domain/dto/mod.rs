//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//!
//! ```text
//! Client ──JSON──► Request DTO ──► Service ──► Entity ──► MongoDB
//!                                                 │
//! Client ◄──JSON── Response DTO ◄─────────────────┘
//! ```
//!
//! - **요청 DTO**: 허용하는 필드를 명시하고 나머지는 무시합니다
//! - **응답 DTO**: `ObjectId`를 문자열로 노출합니다

pub mod songs;
