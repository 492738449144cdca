use serde::{Deserialize, Serialize};

use super::media::Genre;

/// User record as submitted on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Preferred genre
    pub genre: Genre,
}
