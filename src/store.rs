//! Record Store: typed accessors over the relational tables.
//!
//! Each operation checks out one pooled connection and issues exactly one
//! parameterized statement. Row-level SQL lives in `models::db_operations`.

use crate::models::db_operations::{
    contact_db_operations, gallery_db_operations, posts_db_operations, users_db_operations,
};
use crate::models::{ContactEntry, Post, User};
use crate::DbPool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Item not found in database: {0}")]
    NotFound(String),
}

#[derive(Clone)]
pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Builds a pool over the SQLite file at `path`.
    pub fn open(path: &std::path::Path) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(path);
        let pool = r2d2::Pool::builder().build(manager)?;
        Ok(Self::new(pool))
    }

    fn conn(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>, StoreError> {
        self.pool.get().map_err(StoreError::Pool)
    }

    // -- Posts --

    pub fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(posts_db_operations::read_all_posts(&*self.conn()?)?)
    }

    pub fn create_post(&self, title: &str, content: &str) -> Result<(), StoreError> {
        posts_db_operations::create_post(&*self.conn()?, title, content)?;
        Ok(())
    }

    pub fn get_post(&self, id: i64) -> Result<Post, StoreError> {
        match posts_db_operations::read_post(&*self.conn()?, id) {
            Ok(post) => Ok(post),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound(format!("post {}", id))),
            Err(e) => Err(e.into()),
        }
    }

    /// Zero affected rows is not an error.
    pub fn update_post(&self, id: i64, title: &str, content: &str) -> Result<(), StoreError> {
        let affected = posts_db_operations::update_post(&*self.conn()?, id, title, content)?;
        if affected == 0 {
            log::debug!("update_post: no post with id {}", id);
        }
        Ok(())
    }

    /// Zero affected rows is not an error.
    pub fn delete_post(&self, id: i64) -> Result<(), StoreError> {
        let affected = posts_db_operations::delete_post(&*self.conn()?, id)?;
        if affected == 0 {
            log::debug!("delete_post: no post with id {}", id);
        }
        Ok(())
    }

    // -- Gallery --

    pub fn list_images(&self) -> Result<Vec<String>, StoreError> {
        Ok(gallery_db_operations::read_all_image_urls(&*self.conn()?)?)
    }

    pub fn create_image(&self, locator: &str) -> Result<(), StoreError> {
        Ok(gallery_db_operations::add_image(&*self.conn()?, locator)?)
    }

    pub fn delete_image(&self, locator: &str) -> Result<(), StoreError> {
        gallery_db_operations::delete_image(&*self.conn()?, locator)?;
        Ok(())
    }

    // -- Contact entries --

    pub fn list_contact_entries(&self) -> Result<Vec<ContactEntry>, StoreError> {
        Ok(contact_db_operations::read_all_contact_entries(&*self.conn()?)?)
    }

    pub fn create_contact_entry(&self, name: &str, email: &str, message: &str) -> Result<(), StoreError> {
        Ok(contact_db_operations::create_contact_entry(&*self.conn()?, name, email, message)?)
    }

    // -- Users --

    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<(), StoreError> {
        Ok(users_db_operations::create_user(&*self.conn()?, name, email, username, password, role)?)
    }

    /// `Ok(None)` when no row matches; any other failure is an error.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(users_db_operations::read_user_by_username(&*self.conn()?, username)?)
    }

    pub fn list_users_by_role(&self, role: &str) -> Result<Vec<User>, StoreError> {
        Ok(users_db_operations::read_users_by_role(&*self.conn()?, role)?)
    }
}
