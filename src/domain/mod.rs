//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 곡/댓글 문서
//! └── DTOs      - HTTP 요청/응답 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
