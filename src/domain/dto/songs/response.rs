//! 곡 API 응답 DTO
//!
//! 문서 표현을 그대로 내보내되 `ObjectId`는 16진수 문자열로 바꿉니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::songs::{Comment, Song};

/// 곡 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    pub votes: i64,
    pub comments: Vec<CommentResponse>,
}

/// 댓글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            text: comment.text,
        }
    }
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        let Song {
            id,
            title,
            author,
            notes,
            lyrics,
            votes,
            comments,
        } = song;

        Self {
            id: id.to_hex(),
            title,
            author,
            notes,
            lyrics,
            votes,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
