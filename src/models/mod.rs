pub mod baby;
pub mod media;
pub mod user;

pub use baby::{Baby, Sex};
pub use media::{Duration, Genre, Instrument, MusicGenerateQuery, MusicRecord, Speed};
pub use user::User;

use mongodb::bson::{self, Document};
use serde::Serialize;

/// Serialize a typed shape into the document stored for it
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, bson::ser::Error> {
    bson::to_document(value)
}
