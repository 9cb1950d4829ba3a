use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
pub type DbPool = Pool<SqliteConnectionManager>;

use helper::file_store::FileStore;
use store::RecordStore;
use views::Renderer;

/// Process-wide handles, built once in `main` and shared read-only with every handler.
pub struct AppState {
    pub store: RecordStore,
    pub files: FileStore,
    pub views: Renderer,
}

pub mod config;
pub mod error;
pub mod helper;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod setup;
pub mod store;
pub mod views;
