//! 테스트용 인메모리 곡 리포지토리
//!
//! MongoDB 구현과 같은 관찰 가능한 동작을 `Vec` 위에서 재현합니다.
//! 서비스/핸들러 테스트가 실제 데이터베이스 없이 실행되도록 합니다.

use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::AppError,
    domain::entities::songs::{Comment, CommentEnd, Song, SongDetails},
};
use super::song_repo::SongRepository;

#[derive(Default)]
pub struct InMemorySongRepository {
    songs: Mutex<Vec<Song>>,
}

impl InMemorySongRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 일치하는 문서에 `mutate`를 적용하고 갱신 후 상태를 반환합니다.
    fn update_with<F>(&self, id: &ObjectId, mutate: F) -> Result<Option<Song>, AppError>
    where
        F: FnOnce(&mut Song),
    {
        let mut songs = self.lock()?;
        Ok(songs.iter_mut().find(|song| song.id == *id).map(|song| {
            mutate(song);
            song.clone()
        }))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Song>>, AppError> {
        self.songs
            .lock()
            .map_err(|_| AppError::InternalError("song store poisoned".to_string()))
    }
}

/// 다른 필드는 건드리지 않고 네 필드만 덮어씁니다. 없는 값은 제거와 같습니다.
fn apply_details(song: &mut Song, details: SongDetails) {
    song.title = details.title;
    song.author = details.author;
    song.notes = details.notes;
    song.lyrics = details.lyrics;
}

/// `$pop`과 같이 빈 목록에서는 아무 일도 하지 않습니다.
fn pop_comment(song: &mut Song, end: CommentEnd) {
    if song.comments.is_empty() {
        return;
    }
    match end {
        CommentEnd::First => {
            song.comments.remove(0);
        }
        CommentEnd::Last => {
            song.comments.pop();
        }
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn find_all_by_votes(&self) -> Result<Vec<Song>, AppError> {
        let mut songs = self.lock()?.clone();
        songs.sort_by(|a, b| b.votes.cmp(&a.votes));
        Ok(songs)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Song>, AppError> {
        Ok(self.lock()?.iter().find(|song| song.id == *id).cloned())
    }

    async fn insert(&self, song: Song) -> Result<Song, AppError> {
        let mut songs = self.lock()?;
        if songs.iter().any(|existing| existing.id == song.id) {
            return Err(AppError::DatabaseError(format!("duplicate key: {}", song.id)));
        }
        songs.push(song.clone());
        Ok(song)
    }

    async fn insert_many(&self, songs: Vec<Song>) -> Result<Vec<Song>, AppError> {
        for song in &songs {
            self.insert(song.clone()).await?;
        }
        Ok(songs)
    }

    async fn update_details(&self, id: &ObjectId, details: SongDetails) -> Result<Option<Song>, AppError> {
        self.update_with(id, |song| apply_details(song, details))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut songs = self.lock()?;
        let before = songs.len();
        songs.retain(|song| song.id != *id);
        Ok(songs.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut songs = self.lock()?;
        let deleted = songs.len() as u64;
        songs.clear();
        Ok(deleted)
    }

    async fn push_comment(&self, id: &ObjectId, comment: Comment) -> Result<Option<Song>, AppError> {
        self.update_with(id, |song| song.comments.push(comment))
    }

    async fn pull_comment(&self, id: &ObjectId, comment_id: &ObjectId) -> Result<Option<Song>, AppError> {
        self.update_with(id, |song| song.comments.retain(|c| c.id != *comment_id))
    }

    async fn clear_comments(&self, id: &ObjectId) -> Result<Option<Song>, AppError> {
        self.update_with(id, |song| song.comments.clear())
    }

    async fn pop_comment(&self, id: &ObjectId, end: CommentEnd) -> Result<Option<Song>, AppError> {
        self.update_with(id, |song| pop_comment(song, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with_comments(texts: &[&str]) -> Song {
        Song {
            id: ObjectId::new(),
            title: Some("Yekermo Sew".to_string()),
            author: None,
            notes: None,
            lyrics: None,
            votes: 3,
            comments: texts.iter().map(|t| Comment::new(Some(t.to_string()))).collect(),
        }
    }

    #[test]
    fn test_apply_details_keeps_votes_and_comments() {
        let mut song = song_with_comments(&["first"]);
        let comments = song.comments.clone();

        apply_details(&mut song, SongDetails {
            title: Some("Ambassel".to_string()),
            author: Some("Mahmoud Ahmed".to_string()),
            notes: None,
            lyrics: Some("...".to_string()),
        });

        assert_eq!(song.title.as_deref(), Some("Ambassel"));
        assert_eq!(song.votes, 3);
        assert_eq!(song.comments, comments);
    }

    #[test]
    fn test_pop_comment_by_position() {
        let mut song = song_with_comments(&["a", "b", "c"]);

        pop_comment(&mut song, CommentEnd::First);
        assert_eq!(song.comments[0].text.as_deref(), Some("b"));

        pop_comment(&mut song, CommentEnd::Last);
        assert_eq!(song.comments.len(), 1);
        assert_eq!(song.comments[0].text.as_deref(), Some("b"));
    }

    #[test]
    fn test_pop_comment_on_empty_list_is_noop() {
        let mut song = song_with_comments(&[]);
        pop_comment(&mut song, CommentEnd::First);
        pop_comment(&mut song, CommentEnd::Last);

        assert!(song.comments.is_empty());
    }
}
