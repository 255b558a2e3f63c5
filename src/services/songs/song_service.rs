//! # 곡 관리 서비스 구현
//!
//! HTTP 핸들러와 리포지토리 사이에서 식별자 파싱, DTO 변환,
//! 존재하지 않는 문서 처리 규칙을 담당합니다.
//!
//! ## 존재하지 않는 문서 처리
//!
//! | 연산 | 대상 없음 |
//! |------|-----------|
//! | 단건 조회 | `Ok(None)` (응답 본문 `null`) |
//! | 필드 수정, 댓글 조작 | `AppError::NotFound` |
//! | 삭제 | 아무 일도 하지 않음 |
//!
//! 잘못된 형식의 식별자는 저장소에 도달하기 전에 `AppError::ValidationError`가 됩니다.

use std::sync::Arc;
use log::{debug, info};
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::AppError,
    domain::{
        dto::songs::{
            AddCommentRequest, CreateSongRequest, RemoveCommentRequest, SongResponse,
            UpdateSongRequest,
        },
        entities::songs::{Comment, CommentEnd, Song},
    },
    repositories::songs::SongRepository,
};

/// 곡 관리 비즈니스 로직 서비스
///
/// 프로세스 시작 시 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
/// 각 메서드는 리포지토리 호출 한 번으로 끝나며 요청 간 상태를 갖지 않습니다.
#[derive(Clone)]
pub struct SongService {
    song_repo: Arc<dyn SongRepository>,
}

/// 경로 또는 본문의 식별자를 `ObjectId`로 변환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

fn song_not_found(id: &ObjectId) -> AppError {
    AppError::NotFound(format!("Song {} not found", id.to_hex()))
}

impl SongService {
    pub fn new(song_repo: Arc<dyn SongRepository>) -> Self {
        Self { song_repo }
    }

    /// 전체 곡 목록 (`votes` 내림차순)
    pub async fn list_songs(&self) -> Result<Vec<SongResponse>, AppError> {
        let songs = self.song_repo.find_all_by_votes().await?;
        Ok(songs.into_iter().map(SongResponse::from).collect())
    }

    /// 요청 본문으로 새 곡을 만듭니다.
    pub async fn create_song(&self, request: CreateSongRequest) -> Result<SongResponse, AppError> {
        let song = self.song_repo.insert(request.into_song()).await?;
        info!("곡 생성: {}", song.id.to_hex());
        Ok(SongResponse::from(song))
    }

    /// 단건 조회. 없으면 `None`입니다.
    pub async fn get_song(&self, id: &str) -> Result<Option<SongResponse>, AppError> {
        let id = parse_object_id(id)?;
        let song = self.song_repo.find_by_id(&id).await?;
        Ok(song.map(SongResponse::from))
    }

    /// title, author, notes, lyrics 네 필드를 덮어씁니다.
    ///
    /// `votes`와 `comments`는 변경되지 않습니다.
    pub async fn update_song(&self, id: &str, request: UpdateSongRequest) -> Result<SongResponse, AppError> {
        debug!("곡 수정 요청: {}", id);
        let id = parse_object_id(id)?;

        self.song_repo
            .update_details(&id, request.into())
            .await?
            .map(SongResponse::from)
            .ok_or_else(|| song_not_found(&id))
    }

    /// 곡을 삭제합니다. 없는 곡이어도 성공으로 처리합니다.
    pub async fn delete_song(&self, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;
        let deleted = self.song_repo.delete(&id).await?;

        if deleted {
            info!("곡 삭제: {}", id.to_hex());
        } else {
            debug!("삭제할 곡 없음: {}", id.to_hex());
        }
        Ok(())
    }

    /// 댓글을 목록 끝에 추가합니다.
    pub async fn add_comment(&self, id: &str, request: AddCommentRequest) -> Result<SongResponse, AppError> {
        let id = parse_object_id(id)?;
        let comment = Comment::new(request.comment);
        debug!("댓글 추가: {:?}", comment);

        self.mutated(&id, self.song_repo.push_comment(&id, comment).await?)
    }

    /// 식별자가 일치하는 댓글을 제거합니다.
    pub async fn remove_comment(&self, id: &str, request: RemoveCommentRequest) -> Result<SongResponse, AppError> {
        let id = parse_object_id(id)?;
        let comment_id = request
            .body
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("삭제할 댓글 ID가 없습니다".to_string()))
            .and_then(parse_object_id)?;
        debug!("댓글 삭제: {}", comment_id.to_hex());

        self.mutated(&id, self.song_repo.pull_comment(&id, &comment_id).await?)
    }

    /// 댓글을 모두 제거합니다.
    pub async fn clear_comments(&self, id: &str) -> Result<SongResponse, AppError> {
        let id = parse_object_id(id)?;
        self.mutated(&id, self.song_repo.clear_comments(&id).await?)
    }

    /// 위치 기반으로 댓글 하나를 제거합니다.
    pub async fn pop_comment(&self, id: &str, end: CommentEnd) -> Result<SongResponse, AppError> {
        let id = parse_object_id(id)?;
        self.mutated(&id, self.song_repo.pop_comment(&id, end).await?)
    }

    fn mutated(&self, id: &ObjectId, song: Option<Song>) -> Result<SongResponse, AppError> {
        song.map(SongResponse::from).ok_or_else(|| song_not_found(id))
    }
}
