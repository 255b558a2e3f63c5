//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 trait 객체로 리포지토리를 주입받으므로, 테스트에서는
//! 인메모리 구현으로 교체할 수 있습니다.
//!
//! ```rust,ignore
//! use crate::repositories::songs::SongRepository;
//!
//! let song = repo.find_by_id(&id).await?;
//! ```

pub mod songs;
