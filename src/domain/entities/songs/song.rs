//! Song Entity Implementation
//!
//! `songs` 컬렉션에 저장되는 곡 문서와, 그 안에 내장되는 댓글을 정의합니다.

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};

/// 곡 엔티티
///
/// 텍스트 필드는 모두 선택 사항이며 형식 제약이 없습니다.
/// `votes`는 목록 정렬에만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    /// 누락되었거나 숫자가 아니면 0표로 읽습니다.
    #[serde(default, deserialize_with = "deserialize_votes")]
    pub votes: i64,
    /// 삽입 순서를 유지하는 내장 댓글 목록
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// 곡 문서에 내장되는 댓글
///
/// 독립된 컬렉션이나 라우트가 없으며, 식별자는 삽입 시점에 할당됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Comment {
    pub fn new(text: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            text,
        }
    }
}

/// 수정 요청이 덮어쓰는 네 개의 필드
///
/// `None`은 "값 없음"으로 덮어쓴다는 뜻이며, 저장소에서 해당 필드가 제거됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongDetails {
    pub title: Option<String>,
    pub author: Option<String>,
    pub notes: Option<String>,
    pub lyrics: Option<String>,
}

impl SongDetails {
    /// `(필드명, 값)` 쌍으로 펼칩니다. 저장소 구현이 `$set`/`$unset`을 나눌 때 사용합니다.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("title", self.title.as_deref()),
            ("author", self.author.as_deref()),
            ("notes", self.notes.as_deref()),
            ("lyrics", self.lyrics.as_deref()),
        ]
    }
}

/// 위치 기반 댓글 제거 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEnd {
    /// 가장 먼저 달린 댓글
    First,
    /// 가장 최근 댓글
    Last,
}

impl CommentEnd {
    /// MongoDB `$pop` 연산자 인자 (-1: 앞, 1: 뒤)
    pub fn pop_direction(self) -> i32 {
        match self {
            CommentEnd::First => -1,
            CommentEnd::Last => 1,
        }
    }
}

/// 저장된 `votes` 값을 정수로 읽습니다.
///
/// 셸에서 직접 넣은 값은 보통 double이므로 Int32/Int64/Double을 모두 받고,
/// 소수점 이하는 버립니다. 그 외 타입은 0으로 취급합니다.
fn deserialize_votes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let votes = match Bson::deserialize(deserializer)? {
        Bson::Int32(v) => i64::from(v),
        Bson::Int64(v) => v,
        Bson::Double(v) if v.is_finite() => v as i64,
        _ => 0,
    };
    Ok(votes)
}
