//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 대응되는 엔티티를 정의합니다.
//!
//! ## MongoDB 통합
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: `_id` 필드와 매핑
//! - **느슨한 스키마**: 텍스트 필드는 모두 `Option`이며, 누락된 값은 기본값으로 읽습니다
//!
//! ```rust,ignore
//! use crate::domain::entities::songs::Song;
//!
//! let songs = database.get_database().collection::<Song>("songs");
//! ```

pub mod songs;
