//! Lookup filters shared by every handler.

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::api::EntityId;

/// Match a record by its primary key only.
pub fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Match a record by primary key plus the references it must belong to.
///
/// `_id` is compared as a native `ObjectId`, while reference fields such as
/// `user_id` and `baby_id` are compared as strings because records store their
/// references in string form. Keep this mixed comparison in this function only.
pub fn scoped(id: ObjectId, scope: &[(&str, &EntityId)]) -> Document {
    let mut filter = by_id(id);
    for (field, value) in references(scope) {
        filter.insert(field, value);
    }
    filter
}

/// Match every record that belongs to the given references.
pub fn references(scope: &[(&str, &EntityId)]) -> Document {
    let mut filter = Document::new();
    for (field, reference) in scope {
        filter.insert(*field, reference.encoded());
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn scoped_filter_mixes_native_id_and_string_references() {
        let id = ObjectId::new();
        let user = EntityId::new(ObjectId::new());
        let baby = EntityId::new(ObjectId::new());

        let f = scoped(id, &[("user_id", &user), ("baby_id", &baby)]);
        assert_eq!(f.get("_id"), Some(&Bson::ObjectId(id)));
        assert_eq!(f.get_str("user_id").unwrap(), user.encoded());
        assert_eq!(f.get_str("baby_id").unwrap(), baby.encoded());
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn references_only_filter_has_no_id() {
        let user = EntityId::new(ObjectId::new());
        let f = references(&[("user_id", &user)]);
        assert!(f.get("_id").is_none());
        assert_eq!(f.get_str("user_id").unwrap(), user.encoded());
    }
}
