//! Normalises raw stored records into well-formed boxes.

use crate::domain::model::{BoxId, MovingBox};
use serde_json::Value;

/// Turns arbitrary JSON records into valid boxes, silently dropping any record
/// whose `number` is not a whole number of at least 1. Never fails.
pub fn sanitize(raw_records: &[Value]) -> Vec<MovingBox> {
    let boxes: Vec<MovingBox> = raw_records.iter().filter_map(sanitize_record).collect();

    let dropped = raw_records.len() - boxes.len();
    if dropped > 0 {
        tracing::debug!("Sanitizer dropped {} malformed box records", dropped);
    }
    boxes
}

/// Same as [`sanitize`] for a payload that should be a JSON array; anything
/// else yields no boxes.
pub fn sanitize_value(raw: &Value) -> Vec<MovingBox> {
    match raw {
        Value::Array(records) => sanitize(records),
        _ => Vec::new(),
    }
}

/// Stable ascending sort by box number, returning a new list.
pub fn sort_by_number(boxes: &[MovingBox]) -> Vec<MovingBox> {
    let mut sorted = boxes.to_vec();
    sorted.sort_by_key(|b| b.number);
    sorted
}

fn sanitize_record(record: &Value) -> Option<MovingBox> {
    let fields = record.as_object()?;
    let number = coerce_number(fields.get("number")?)?;

    let id = match fields.get("id") {
        Some(Value::String(id)) => BoxId::from(id.as_str()),
        Some(Value::Number(id)) => BoxId::from(id.to_string()),
        _ => BoxId::generate(),
    };

    let room = match fields.get("room") {
        Some(Value::String(room)) => room.clone(),
        _ => String::new(),
    };

    let items = match fields.get("items") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    Some(MovingBox {
        id,
        number,
        room,
        items,
    })
}

/// Accepts JSON numbers and numeric strings holding a whole value >= 1.
fn coerce_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => whole_number(n.as_f64()?),
        Value::String(s) => parse_box_number(s),
        _ => None,
    }
}

/// Parses text such as `"4"`, `" 4 "` or `"4.0"` into a box number.
pub(crate) fn parse_box_number(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    whole_number(trimmed.parse::<f64>().ok()?)
}

fn whole_number(numeric: f64) -> Option<u32> {
    if !numeric.is_finite() || numeric.fract() != 0.0 || numeric < 1.0 || numeric > u32::MAX as f64 {
        return None;
    }
    Some(numeric as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbers(boxes: &[MovingBox]) -> Vec<u32> {
        boxes.iter().map(|b| b.number).collect()
    }

    #[test]
    fn test_sanitize_drops_invalid_numbers_and_blank_items() {
        let raw = vec![
            json!({"id": "ok", "number": "2", "room": "Office", "items": ["Laptop", "  ", ""]}),
            json!({"id": "bad-number", "number": 0, "room": "Garage", "items": ["Tool"]}),
            json!({"id": "not-a-number", "number": "abc", "room": "Attic", "items": ["Box"]}),
            json!({"id": "negative", "number": -3, "room": "Basement", "items": ["Paint"]}),
            json!({"id": "fraction", "number": 2.5, "room": "Shed", "items": []}),
            json!({"id": "no-items", "number": 5, "room": "Porch", "items": "invalid"}),
        ];

        let sanitized = sanitize(&raw);

        assert_eq!(
            sanitized,
            vec![
                MovingBox {
                    id: BoxId::from("ok"),
                    number: 2,
                    room: "Office".to_string(),
                    items: vec!["Laptop".to_string()],
                },
                MovingBox {
                    id: BoxId::from("no-items"),
                    number: 5,
                    room: "Porch".to_string(),
                    items: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_sanitize_tolerates_garbage() {
        let raw = vec![
            json!(null),
            json!("box"),
            json!([1, 2, 3]),
            json!({"room": "Hall"}),
            json!({"number": 3, "items": [1, "Mug", null]}),
        ];

        let sanitized = sanitize(&raw);

        assert_eq!(sanitized.len(), 1);
        assert_eq!(sanitized[0].number, 3);
        assert_eq!(sanitized[0].room, "");
        assert_eq!(sanitized[0].items, vec!["Mug".to_string()]);
        assert!(!sanitized[0].id.as_str().is_empty());
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let raw = vec![
            json!({"id": "a", "number": "7", "room": "Den", "items": [" Lamp ", "", "Rug"]}),
            json!({"id": "b", "number": 1, "items": []}),
        ];

        let once = sanitize(&raw);
        let reencoded: Vec<Value> = once.iter().map(|b| serde_json::to_value(b).unwrap()).collect();
        let twice = sanitize(&reencoded);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_value_requires_array() {
        assert!(sanitize_value(&json!({"number": 1})).is_empty());
        assert_eq!(sanitize_value(&json!([{"id": "x", "number": 1}])).len(), 1);
    }

    #[test]
    fn test_sort_by_number_is_stable() {
        let boxes = vec![
            MovingBox::new(3, "Office", vec![]),
            MovingBox::new(1, "Garage", vec![]),
            MovingBox::new(2, "first", vec![]),
            MovingBox::new(2, "second", vec![]),
        ];

        let sorted = sort_by_number(&boxes);

        assert_eq!(numbers(&sorted), vec![1, 2, 2, 3]);
        assert_eq!(sorted[1].room, "first");
        assert_eq!(sorted[2].room, "second");
        assert_eq!(numbers(&boxes), vec![3, 1, 2, 2]);
    }
}
