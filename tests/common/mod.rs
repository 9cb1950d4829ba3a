//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use actix_web::web;
use rusqlite::Connection;
use std::fs;
use weblat_backend::helper::file_store::FileStore;
use weblat_backend::setup::db_setup;
use weblat_backend::store::RecordStore;
use weblat_backend::views::Renderer;
use weblat_backend::AppState;

pub const MAX_UPLOAD_BYTES: u64 = 64 * 1024;

pub struct TestEnv {
    pub dir: tempfile::TempDir,
    pub state: web::Data<AppState>,
}

impl TestEnv {
    pub fn store(&self) -> &RecordStore {
        &self.state.store
    }

    pub fn files(&self) -> &FileStore {
        &self.state.files
    }
}

/// A fresh database, upload directory and the shipped templates, all under one temp dir.
pub fn test_store(dir: &tempfile::TempDir) -> RecordStore {
    let db_file = dir.path().join("weblat.db");
    let mut conn = Connection::open(&db_file).expect("Failed to create test database");
    db_setup::setup_database(&mut conn).expect("Failed to create schema");
    RecordStore::open(&db_file).expect("Failed to open test pool")
}

pub fn test_env() -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);

    let upload_dir = dir.path().join("uploads");
    fs::create_dir_all(&upload_dir).unwrap();
    let files = FileStore::new(upload_dir, MAX_UPLOAD_BYTES);

    let views = Renderer::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
        .expect("Failed to load templates");

    let state = web::Data::new(AppState { store, files, views });
    TestEnv { dir, state }
}
