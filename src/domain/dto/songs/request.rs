//! 곡 API 요청 DTO
//!
//! 클라이언트가 보내는 JSON 본문의 형태를 명시합니다.
//! 모든 필드는 선택 사항이고, 선언되지 않은 필드는 무시됩니다.
//! 내용 검증은 하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::songs::{Comment, Song, SongDetails};

/// 곡 생성 요청 (`POST /songs`)
///
/// 시드 픽스처도 같은 형식을 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSongRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub votes: Option<i64>,
    #[serde(default)]
    pub comments: Vec<NewComment>,
}

/// 생성 요청에 포함된 초기 댓글
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateSongRequest {
    /// 새 식별자를 할당하여 엔티티로 변환합니다.
    pub fn into_song(self) -> Song {
        Song {
            id: ObjectId::new(),
            title: self.title,
            author: self.author,
            notes: self.notes,
            lyrics: self.lyrics,
            votes: self.votes.unwrap_or_default(),
            comments: self
                .comments
                .into_iter()
                .map(|comment| Comment::new(comment.text))
                .collect(),
        }
    }
}

/// 곡 수정 요청 (`PUT /songs/{id}`)
///
/// 네 필드 모두 덮어쓰며, 본문에 없는 필드는 비워집니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSongRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl From<UpdateSongRequest> for SongDetails {
    fn from(request: UpdateSongRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
            notes: request.notes,
            lyrics: request.lyrics,
        }
    }
}

/// 댓글 추가 요청 (`PUT /songs/{id}/comment`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub comment: Option<String>,
}

/// 댓글 삭제 요청 (`PUT /songs/{id}/delete`)
///
/// `body`에 삭제할 댓글의 `_id`를 담습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveCommentRequest {
    #[serde(default)]
    pub body: Option<String>,
}
