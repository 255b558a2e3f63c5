//! 곡 컬렉션 시드 스크립트
//!
//! 서비스와 같은 방식으로 연결한 뒤 `songs` 컬렉션을 비우고
//! 픽스처를 삽입하고 연결을 닫습니다. 서비스 실행 중에는 사용하지 않습니다.
//!
//! ```bash
//! cargo run --bin seed
//! NODE_ENV=production DB_URL=mongodb://... cargo run --bin seed
//! ```

use std::sync::Arc;
use log::{error, info};
use konjo_songs::config::{Environment, init_logging, load_env_file};
use konjo_songs::db::Database;
use konjo_songs::repositories::songs::MongoSongRepository;
use konjo_songs::seed::reseed;

#[actix_web::main]
async fn main() {
    load_env_file();
    init_logging();

    let database = match Database::connect(&Environment::current()).await {
        Ok(database) => database,
        Err(e) => {
            error!("데이터베이스 연결 실패: {}", e);
            std::process::exit(1);
        }
    };

    info!("🌱 {} 데이터베이스의 songs 컬렉션을 다시 채웁니다", database.database_name());

    let repo = MongoSongRepository::new(Arc::new(database.clone()));
    let result = reseed(&repo).await;
    drop(repo);

    database.close().await;

    match result {
        Ok(songs) => info!("✅ 시드 완료: {}곡", songs.len()),
        Err(e) => {
            error!("시드 실패: {}", e);
            std::process::exit(1);
        }
    }
}
