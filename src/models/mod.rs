use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String, // stored verbatim
    pub role: String,     // 'admin' or 'user'
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GalleryImage {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ContactEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The two roles a user row may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Where a successful login lands for this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/home-adm",
            Role::User => "/home-usr",
        }
    }
}

pub mod db_operations;
