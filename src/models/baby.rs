use serde::{Deserialize, Serialize};

use crate::api::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Baby record. `user_id` references the owning user and is stored in its
/// string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baby {
    pub user_id: EntityId,
    pub name: String,
    pub sex: Sex,
    pub birth: String,
    /// Gestational weeks at birth
    pub weeks: i32,
    #[serde(default)]
    pub desc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, Bson};
    use serde_json::json;

    #[test]
    fn stores_user_reference_as_string() {
        let user = ObjectId::new();
        let baby: Baby = serde_json::from_value(json!({
            "user_id": user.to_hex(),
            "name": "B",
            "sex": "female",
            "birth": "2024-01-01",
            "weeks": 39
        }))
        .unwrap();

        let doc = crate::models::to_document(&baby).unwrap();
        assert_eq!(doc.get_str("user_id").unwrap(), user.to_hex());
        assert_eq!(doc.get("desc"), Some(&Bson::Null));
        assert_eq!(doc.get_i32("weeks").unwrap(), 39);
    }

    #[test]
    fn rejects_unknown_sex() {
        let result: Result<Baby, _> = serde_json::from_value(json!({
            "user_id": ObjectId::new().to_hex(),
            "name": "B",
            "sex": "other",
            "birth": "2024-01-01",
            "weeks": 39
        }));
        assert!(result.is_err());
    }
}
