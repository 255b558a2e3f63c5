//! # 곡 리포지토리 구현
//!
//! 곡 문서에 대한 데이터 액세스 계층입니다.
//! 서비스는 [`SongRepository`] trait에만 의존하고, 운영 환경에서는
//! MongoDB 구현인 [`MongoSongRepository`]가 주입됩니다.
//!
//! ## 원자성
//!
//! 댓글 조작과 필드 덮어쓰기는 모두 단일 문서 업데이트 명령
//! (`$set`/`$unset`, `$push`, `$pull`, `$pop`) 하나로 실행되며,
//! 갱신 후 문서를 `ReturnDocument::After`로 돌려받습니다.
//! 여러 문서에 걸친 트랜잭션이나 낙관적 잠금은 없습니다.
//! 업데이트 문서는 순수 함수(`*_update`)로 만들어 단위 테스트합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{self, Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use crate::{
    core::errors::{AppError, ErrorContext},
    db::Database,
    domain::entities::songs::{Comment, CommentEnd, Song, SongDetails},
};

/// 곡 문서가 저장되는 컬렉션 이름
pub const SONG_COLLECTION: &str = "songs";

/// 곡 저장소 인터페이스
///
/// `Option`을 반환하는 메서드는 대상 문서가 없을 때 `Ok(None)`을 돌려줍니다.
/// 없는 문서를 에러로 볼지는 서비스 계층이 결정합니다.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// 전체 곡을 `votes` 내림차순으로 조회합니다.
    async fn find_all_by_votes(&self) -> Result<Vec<Song>, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Song>, AppError>;

    async fn insert(&self, song: Song) -> Result<Song, AppError>;

    async fn insert_many(&self, songs: Vec<Song>) -> Result<Vec<Song>, AppError>;

    /// 네 필드를 덮어씁니다. 값이 없는 필드는 문서에서 제거됩니다.
    async fn update_details(&self, id: &ObjectId, details: SongDetails) -> Result<Option<Song>, AppError>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;

    /// 컬렉션을 비우고 삭제된 문서 수를 반환합니다.
    async fn delete_all(&self) -> Result<u64, AppError>;

    async fn push_comment(&self, id: &ObjectId, comment: Comment) -> Result<Option<Song>, AppError>;

    /// 식별자가 일치하는 댓글을 모두 제거합니다. 일치하는 것이 없으면 그대로입니다.
    async fn pull_comment(&self, id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Song>, AppError>;

    async fn clear_comments(&self, id: &ObjectId) -> Result<Option<Song>, AppError>;

    /// 앞 또는 뒤에서 댓글 하나를 제거합니다. 빈 목록이면 그대로입니다.
    async fn pop_comment(&self, id: &ObjectId, end: CommentEnd) -> Result<Option<Song>, AppError>;
}

/// MongoDB 기반 곡 리포지토리
///
/// - **컬렉션명**: `songs`
/// - **인덱스**: `votes` (내림차순, 목록 정렬용)
pub struct MongoSongRepository {
    /// 프로세스 전체가 공유하는 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoSongRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Song> {
        self.db.get_database().collection::<Song>(SONG_COLLECTION)
    }

    /// 단일 문서 업데이트 명령을 실행하고 갱신 후 문서를 반환합니다.
    async fn update_one_returning(&self, id: &ObjectId, update: Document) -> Result<Option<Song>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let song = self.collection()
            .find_one_and_update(doc! { "_id": *id }, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(song)
    }

    /// 목록 정렬에 쓰이는 `votes` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let votes_index = mongodb::IndexModel::builder()
            .keys(doc! { "votes": -1 })
            .options(mongodb::options::IndexOptions::builder()
                .name("votes_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_index(votes_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 네 필드를 `$set`과 `$unset`으로 나눈 업데이트 문서를 만듭니다.
pub(crate) fn details_update(details: &SongDetails) -> Document {
    let mut set = Document::new();
    let mut unset = Document::new();

    for (field, value) in details.fields() {
        match value {
            Some(value) => set.insert(field, value),
            None => unset.insert(field, ""),
        };
    }

    let mut update = Document::new();
    if !set.is_empty() {
        update.insert("$set", set);
    }
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }
    update
}

/// 댓글 하나를 목록 끝에 붙이는 `$push` 문서
pub(crate) fn push_comment_update(comment: &Comment) -> Result<Document, AppError> {
    let encoded = bson::to_bson(comment)
        .with_context(|| format!("Failed to encode comment {}", comment.id))?;

    Ok(doc! { "$push": { "comments": encoded } })
}

/// 식별자가 일치하는 댓글을 모두 제거하는 `$pull` 문서
pub(crate) fn pull_comment_update(comment_id: &ObjectId) -> Document {
    doc! { "$pull": { "comments": { "_id": *comment_id } } }
}

/// 댓글 목록을 빈 배열로 덮어쓰는 문서
pub(crate) fn clear_comments_update() -> Document {
    doc! { "$set": { "comments": [] } }
}

/// 앞(-1) 또는 뒤(1)에서 댓글 하나를 제거하는 `$pop` 문서
pub(crate) fn pop_comment_update(end: CommentEnd) -> Document {
    doc! { "$pop": { "comments": end.pop_direction() } }
}

#[async_trait]
impl SongRepository for MongoSongRepository {
    async fn find_all_by_votes(&self) -> Result<Vec<Song>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "votes": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<Song>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Song>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, song: Song) -> Result<Song, AppError> {
        self.collection()
            .insert_one(&song)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(song)
    }

    async fn insert_many(&self, songs: Vec<Song>) -> Result<Vec<Song>, AppError> {
        // 빈 배치는 드라이버가 거부한다
        if songs.is_empty() {
            return Ok(songs);
        }

        self.collection()
            .insert_many(&songs)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(songs)
    }

    async fn update_details(&self, id: &ObjectId, details: SongDetails) -> Result<Option<Song>, AppError> {
        self.update_one_returning(id, details_update(&details)).await
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.collection()
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn push_comment(&self, id: &ObjectId, comment: Comment) -> Result<Option<Song>, AppError> {
        self.update_one_returning(id, push_comment_update(&comment)?).await
    }

    async fn pull_comment(&self, id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Song>, AppError> {
        self.update_one_returning(id, pull_comment_update(comment_id)).await
    }

    async fn clear_comments(&self, id: &ObjectId) -> Result<Option<Song>, AppError> {
        self.update_one_returning(id, clear_comments_update()).await
    }

    async fn pop_comment(&self, id: &ObjectId, end: CommentEnd) -> Result<Option<Song>, AppError> {
        self.update_one_returning(id, pop_comment_update(end)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_update_splits_set_and_unset() {
        let update = details_update(&SongDetails {
            title: Some("Ere Mela Mela".to_string()),
            author: Some("Mahmoud Ahmed".to_string()),
            notes: None,
            lyrics: None,
        });

        let set = update.get_document("$set").unwrap();
        let unset = update.get_document("$unset").unwrap();

        assert_eq!(set.get_str("title").unwrap(), "Ere Mela Mela");
        assert_eq!(set.get_str("author").unwrap(), "Mahmoud Ahmed");
        assert!(unset.contains_key("notes"));
        assert!(unset.contains_key("lyrics"));
        assert!(!set.contains_key("votes"));
        assert!(!unset.contains_key("comments"));
    }

    #[test]
    fn test_details_update_omits_empty_operators() {
        let all_set = details_update(&SongDetails {
            title: Some("t".to_string()),
            author: Some("a".to_string()),
            notes: Some("n".to_string()),
            lyrics: Some("l".to_string()),
        });
        assert!(!all_set.contains_key("$unset"));

        let all_unset = details_update(&SongDetails::default());
        assert!(!all_unset.contains_key("$set"));
        assert_eq!(all_unset.get_document("$unset").unwrap().len(), 4);
    }

    #[test]
    fn test_push_comment_update_embeds_comment_with_id() {
        let comment = Comment::new(Some("nice".to_string()));
        let update = push_comment_update(&comment).unwrap();

        let pushed = update
            .get_document("$push").unwrap()
            .get_document("comments").unwrap();

        assert_eq!(pushed.get_object_id("_id").unwrap(), comment.id);
        assert_eq!(pushed.get_str("text").unwrap(), "nice");
    }

    #[test]
    fn test_pull_comment_update_matches_by_id() {
        let comment_id = ObjectId::new();
        let update = pull_comment_update(&comment_id);

        assert_eq!(update, doc! { "$pull": { "comments": { "_id": comment_id } } });
    }

    #[test]
    fn test_clear_comments_update_sets_empty_array() {
        let update = clear_comments_update();
        let comments = update
            .get_document("$set").unwrap()
            .get_array("comments").unwrap();

        assert!(comments.is_empty());
        assert_eq!(update.len(), 1);
    }

    #[test]
    fn test_pop_comment_update_direction() {
        assert_eq!(pop_comment_update(CommentEnd::First), doc! { "$pop": { "comments": -1 } });
        assert_eq!(pop_comment_update(CommentEnd::Last), doc! { "$pop": { "comments": 1 } });
    }
}
