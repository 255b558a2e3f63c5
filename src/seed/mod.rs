//! 곡 컬렉션 시드 모듈
//!
//! 컬렉션을 비운 뒤 `data/seed.json` 픽스처를 한 번에 삽입합니다.
//! 삭제와 삽입은 별개의 연산이므로, 삽입이 실패하면 컬렉션은 빈 채로 남습니다.

use log::info;
use crate::{
    core::errors::{AppResult, ErrorContext},
    domain::{dto::songs::CreateSongRequest, entities::songs::Song},
    repositories::songs::SongRepository,
};

/// 바이너리에 포함되는 시드 픽스처 (JSON 배열)
pub const SEED_FIXTURES: &str = include_str!("../../data/seed.json");

/// 픽스처를 파싱하여 새 식별자가 할당된 곡 목록으로 만듭니다.
pub fn fixtures() -> AppResult<Vec<Song>> {
    parse_fixtures(SEED_FIXTURES)
}

pub fn parse_fixtures(raw: &str) -> AppResult<Vec<Song>> {
    let requests: Vec<CreateSongRequest> =
        serde_json::from_str(raw).context("Failed to parse seed fixtures")?;

    Ok(requests.into_iter().map(CreateSongRequest::into_song).collect())
}

/// 컬렉션을 비우고 픽스처를 삽입한 뒤, 삽입된 곡을 반환합니다.
pub async fn reseed(repo: &dyn SongRepository) -> AppResult<Vec<Song>> {
    let songs = fixtures()?;

    let deleted = repo.delete_all().await?;
    info!("Deleted Songs: {}", deleted);

    let inserted = repo.insert_many(songs).await?;
    for song in &inserted {
        info!(
            "  {} | {} - {} ({} votes, {} comments)",
            song.id.to_hex(),
            song.title.as_deref().unwrap_or("<untitled>"),
            song.author.as_deref().unwrap_or("<unknown>"),
            song.votes,
            song.comments.len()
        );
    }
    info!("Inserted Songs: {}", inserted.len());

    Ok(inserted)
}
