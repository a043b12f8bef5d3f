//! User types

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: String, username: String) -> Self {
        Self { id, username }
    }
}

/// Form body for `POST /api/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
}
