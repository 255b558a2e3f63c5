//! 곡 데이터 액세스 계층
//!
//! [`SongRepository`](song_repo::SongRepository) trait과 MongoDB 구현
//! [`MongoSongRepository`](song_repo::MongoSongRepository)를 제공합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::songs::MongoSongRepository;
//!
//! let repo = MongoSongRepository::new(Arc::new(database));
//! let songs = repo.find_all_by_votes().await?;
//! ```

pub mod song_repo;
#[cfg(test)]
pub mod memory_repo;

pub use song_repo::*;
