use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use super::ids::encode;

/// Name of the store's primary key field.
pub const STORE_ID_FIELD: &str = "_id";

/// Converts stored documents into the public wire format.
///
/// The store's `_id` is always taken out of the record. When `id_field` is set
/// it is written back as its string encoding under that name. Fields listed in
/// `hidden` never leave the API.
#[derive(Debug, Clone, Copy)]
pub struct Shaper {
    id_field: Option<&'static str>,
    hidden: &'static [&'static str],
}

impl Shaper {
    /// Drop the identifier entirely.
    pub const fn without_id() -> Self {
        Self { id_field: None, hidden: &[] }
    }

    /// Expose the identifier as a string under `field`.
    pub const fn with_id(field: &'static str) -> Self {
        Self { id_field: Some(field), hidden: &[] }
    }

    pub const fn hiding(mut self, hidden: &'static [&'static str]) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn shape(&self, mut record: Document) -> Value {
        let id = record.remove(STORE_ID_FIELD);

        let mut obj = Map::new();
        if let (Some(field), Some(id)) = (self.id_field, id) {
            obj.insert(field.to_string(), id_to_value(id));
        }
        for (key, value) in record {
            if self.hidden.contains(&key.as_str()) { continue; }
            obj.insert(key, value.into_relaxed_extjson());
        }

        Value::Object(obj)
    }

    /// Shape every record, keeping input order.
    pub fn shape_all(&self, records: Vec<Document>) -> Vec<Value> {
        records.into_iter().map(|r| self.shape(r)).collect()
    }
}

/// Return a single field of a stored record as JSON (`null` if absent).
pub fn project_field(mut record: Document, field: &str) -> Value {
    record
        .remove(field)
        .map(Bson::into_relaxed_extjson)
        .unwrap_or(Value::Null)
}

fn id_to_value(id: Bson) -> Value {
    match id {
        Bson::ObjectId(oid) => Value::String(encode(&oid)),
        other => other.into_relaxed_extjson(),
    }
}
