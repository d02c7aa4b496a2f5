//! Helpers for dynamic JSON entities
//!
//! Entities cross the resolver's seams as `serde_json::Value` objects. The
//! only structural requirement this core places on them is a UUID `id`
//! field, serialized as a string.

use serde_json::Value;
use uuid::Uuid;

/// Extract the id of a dynamic entity
///
/// Returns `None` when the value is not an object, has no `id` field, or the
/// field does not parse as a UUID.
pub fn entity_id(entity: &Value) -> Option<Uuid> {
    entity
        .get("id")
        .and_then(|v| v.as_str())
        .and_then(|s| Uuid::parse_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id() {
        let id = Uuid::new_v4();
        let entity = json!({ "id": id.to_string(), "name": "Acme" });
        assert_eq!(entity_id(&entity), Some(id));
    }

    #[test]
    fn test_entity_id_missing_or_invalid() {
        assert_eq!(entity_id(&json!({ "name": "Acme" })), None);
        assert_eq!(entity_id(&json!({ "id": "not-a-uuid" })), None);
        assert_eq!(entity_id(&json!({ "id": 42 })), None);
        assert_eq!(entity_id(&json!("scalar")), None);
    }
}
