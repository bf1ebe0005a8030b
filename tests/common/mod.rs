#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use productos_api::{
    db::create_schema,
    error::AppResult,
    models::Producto,
    repository::{Page, ProductoQuery, ProductoRepository, SeaOrmProductoRepository},
    state::AppState,
    storage::StorageService,
};
use sea_orm::{ConnectOptions, Database, DbErr};

/// Fresh SQLite database living in memory. A single connection keeps every
/// query on the same database.
pub async fn memory_repository() -> anyhow::Result<SeaOrmProductoRepository> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    create_schema(&conn).await?;
    Ok(SeaOrmProductoRepository::new(conn))
}

/// Storage double that keeps blobs in memory.
#[derive(Default)]
pub struct MemoryStorage {
    pub files: Mutex<Vec<(String, Option<String>, Vec<u8>)>>,
}

#[async_trait]
impl StorageService for MemoryStorage {
    async fn store(&self, file_name: Option<&str>, content: &[u8]) -> anyhow::Result<String> {
        let mut files = self.files.lock().unwrap();
        let id = format!("blob-{}", files.len() + 1);
        files.push((id.clone(), file_name.map(str::to_string), content.to_vec()));
        Ok(id)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.files.lock().unwrap().retain(|(stored, _, _)| stored != id);
        Ok(())
    }

    fn url(&self, id: &str) -> String {
        format!("http://localhost:8080/rest/files/{id}")
    }
}

pub async fn memory_state() -> anyhow::Result<(AppState, Arc<MemoryStorage>)> {
    let storage = Arc::new(MemoryStorage::default());
    let state = AppState::new(Arc::new(memory_repository().await?), storage.clone());
    Ok((state, storage))
}

/// Repository whose every call fails the way a lost database connection does.
pub struct FailingRepository;

fn connection_lost<T>() -> AppResult<T> {
    Err(DbErr::Custom("connection lost".into()).into())
}

#[async_trait]
impl ProductoRepository for FailingRepository {
    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Producto>> {
        connection_lost()
    }

    async fn find_all(&self) -> AppResult<Vec<Producto>> {
        connection_lost()
    }

    async fn find_by_nombre_contains(&self, _nombre: &str) -> AppResult<Vec<Producto>> {
        connection_lost()
    }

    async fn find_page(&self, _query: &ProductoQuery) -> AppResult<Page<Producto>> {
        connection_lost()
    }

    async fn save(&self, _producto: Producto) -> AppResult<Producto> {
        connection_lost()
    }

    async fn delete(&self, _producto: &Producto) -> AppResult<()> {
        connection_lost()
    }
}

pub fn failing_state() -> (AppState, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let state = AppState::new(Arc::new(FailingRepository), storage.clone());
    (state, storage)
}
