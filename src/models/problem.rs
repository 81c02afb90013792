use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A coding exercise owned by the problem catalogue. Only `id` is relied on
/// here; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Problem {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_unknown_fields() {
        let problem: Problem = serde_json::from_value(json!({
            "id": "p-42",
            "title": "Two Sum",
            "tags": ["array", "hash-map"]
        }))
        .unwrap();

        assert_eq!(problem.id, "p-42");
        assert_eq!(problem.title(), Some("Two Sum"));
        assert_eq!(problem.fields["tags"], json!(["array", "hash-map"]));
    }

    #[test]
    fn test_title_absent() {
        let problem: Problem = serde_json::from_value(json!({ "id": "p-1" })).unwrap();
        assert_eq!(problem.title(), None);
        assert!(problem.fields.is_empty());
    }

    #[test]
    fn test_id_required() {
        let err = serde_json::from_value::<Problem>(json!({ "title": "Two Sum" })).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }
}
