//! Conversion between the public string form of an identifier and the store's `ObjectId`.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Length of the hex rendering of an `ObjectId`.
const ENCODED_LEN: usize = 24;

/// Client-supplied identifier that is not in the encoded form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{0}'")]
pub struct InvalidIdentifier(pub String);

/// Decode a client-supplied identifier. Only the exact rendering produced by
/// `encode` (24 lowercase hex digits) is accepted.
pub fn decode(raw: &str) -> Result<ObjectId, InvalidIdentifier> {
    if !is_encoded_form(raw) {
        return Err(InvalidIdentifier(raw.to_string()));
    }
    ObjectId::parse_str(raw).map_err(|_| InvalidIdentifier(raw.to_string()))
}

pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}

fn is_encoded_form(raw: &str) -> bool {
    raw.len() == ENCODED_LEN && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Identifier that has already passed `decode`.
///
/// Used inside query and body shapes so malformed identifiers are rejected by
/// the extractor, before a handler runs. Serializes back to its string form,
/// which is how references to other records are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(ObjectId);

impl EntityId {
    pub fn new(id: ObjectId) -> Self {
        Self(id)
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn encoded(&self) -> String {
        encode(&self.0)
    }
}

impl From<ObjectId> for EntityId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map(EntityId).map_err(de::Error::custom)
    }
}

/// `deserialize_with` helper for optional identifiers in query strings, where
/// an empty value (`baby_id=`) means the parameter was not given.
pub fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<EntityId>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => decode(&raw).map(|id| Some(EntityId(id))).map_err(de::Error::custom),
        _ => Ok(None),
    }
}
