//! # Song HTTP Handlers
//!
//! 곡 컬렉션 경로(`/songs`) 아래의 엔드포인트를 처리합니다.
//! 모든 핸들러는 서비스 호출 한 번으로 끝나며, 에러는 `AppError`를 통해
//! 상태 코드로 변환됩니다.
//!
//! | 메서드 | 경로 | 본문 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/songs` | - | 곡 배열 (votes 내림차순) |
//! | `POST` | `/songs` | 곡 필드 | 302 → `/songs` |
//! | `GET` | `/songs/{id}` | - | 곡 또는 `null` |
//! | `PUT` | `/songs/{id}` | `{title,author,notes,lyrics}` | 수정된 곡 |
//! | `DELETE` | `/songs/{id}` | - | `"/songs"` |
//! | `PUT` | `/songs/{id}/comment` | `{comment}` | 수정된 곡 |
//! | `PUT` | `/songs/{id}/delete` | `{body}` | 수정된 곡 |
//! | `DELETE` | `/songs/{id}/clean` | - | 수정된 곡 |
//! | `DELETE` | `/songs/{id}/poptop` | - | 수정된 곡 |
//! | `DELETE` | `/songs/{id}/popbottom` | - | 수정된 곡 |

use actix_web::{delete, get, http::header, post, put, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::songs::{
    AddCommentRequest, CreateSongRequest, RemoveCommentRequest, UpdateSongRequest,
};
use crate::domain::entities::songs::CommentEnd;
use crate::services::songs::SongService;

/// 생성/삭제 후 클라이언트가 돌아갈 목록 경로
pub const SONGS_PATH: &str = "/songs";

#[get("")]
pub async fn list_songs(
    service: web::Data<SongService>,
) -> Result<HttpResponse, AppError> {
    let songs = service.list_songs().await?;

    Ok(HttpResponse::Ok().json(songs))
}

#[post("")]
pub async fn create_song(
    service: web::Data<SongService>,
    payload: web::Json<CreateSongRequest>,
) -> Result<HttpResponse, AppError> {
    service.create_song(payload.into_inner()).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, SONGS_PATH))
        .finish())
}

/// 없는 곡이면 200과 `null`을 반환합니다.
#[get("/{song_id}")]
pub async fn get_song(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let song = service.get_song(&song_id).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[put("/{song_id}")]
pub async fn update_song(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
    payload: web::Json<UpdateSongRequest>,
) -> Result<HttpResponse, AppError> {
    let song = service.update_song(&song_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[delete("/{song_id}")]
pub async fn delete_song(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_song(&song_id).await?;

    Ok(HttpResponse::Ok().json(SONGS_PATH))
}

#[put("/{song_id}/comment")]
pub async fn add_comment(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
    payload: web::Json<AddCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let song = service.add_comment(&song_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[put("/{song_id}/delete")]
pub async fn remove_comment(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
    payload: web::Json<RemoveCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let song = service.remove_comment(&song_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[delete("/{song_id}/clean")]
pub async fn clear_comments(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let song = service.clear_comments(&song_id).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[delete("/{song_id}/poptop")]
pub async fn pop_top_comment(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let song = service.pop_comment(&song_id, CommentEnd::First).await?;

    Ok(HttpResponse::Ok().json(song))
}

#[delete("/{song_id}/popbottom")]
pub async fn pop_bottom_comment(
    service: web::Data<SongService>,
    song_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let song = service.pop_comment(&song_id, CommentEnd::Last).await?;

    Ok(HttpResponse::Ok().json(song))
}
