//! Wire-format conversion for stored documents.
//!
//! Stored documents leave the system as plain JSON: identifiers are
//! already string-typed `id` fields (the backends guarantee that), and
//! this module handles the remaining representation gaps - BSON datetimes
//! become RFC 3339 text and ObjectIds become hex strings rather than
//! extended-JSON wrappers.

use bson::Bson;
use serde_json::{Map, Number, Value};

/// Converts a stored BSON value into a plain JSON value.
///
/// Recursively walks arrays and documents. Datetimes serialize as
/// RFC 3339 strings, ObjectIds as their hex form, non-finite doubles as
/// null. BSON types this system never stores (binary, timestamps,
/// decimals) also fold to null rather than leaking extended JSON.
pub fn to_wire_json(value: &Bson) -> Value {
    match value {
        Bson::Null => Value::Null,
        Bson::Boolean(flag) => Value::Bool(*flag),
        Bson::Int32(n) => Value::from(*n),
        Bson::Int64(n) => Value::from(*n),
        Bson::Double(d) => Number::from_f64(*d).map(Value::Number).unwrap_or(Value::Null),
        Bson::String(s) => Value::String(s.clone()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Array(items) => Value::Array(items.iter().map(to_wire_json).collect()),
        Bson::Document(doc) => Value::Object(
            doc.iter()
                .map(|(key, value)| (key.clone(), to_wire_json(value)))
                .collect::<Map<String, Value>>(),
        ),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{DateTime, doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn scalars_convert_to_plain_json() {
        let document = doc! {
            "title": "Nike Elite 1",
            "price": 119.0,
            "sizes": [38, 39, 40],
            "is_new": false,
            "material": Bson::Null,
        };

        assert_eq!(
            to_wire_json(&Bson::Document(document)),
            json!({
                "title": "Nike Elite 1",
                "price": 119.0,
                "sizes": [38, 39, 40],
                "is_new": false,
                "material": null,
            })
        );
    }

    #[test]
    fn object_ids_become_hex_strings() {
        let oid = ObjectId::new();
        assert_eq!(to_wire_json(&Bson::ObjectId(oid)), Value::String(oid.to_hex()));
    }

    #[test]
    fn datetimes_become_rfc3339_text() {
        let dt = DateTime::from_millis(1_700_000_000_000);
        let wire = to_wire_json(&Bson::DateTime(dt));
        let Value::String(text) = wire else {
            panic!("expected a string, got {wire:?}");
        };
        assert!(text.starts_with("2023-11-14T"), "unexpected rendering: {text}");
    }

    #[test]
    fn non_finite_doubles_fold_to_null() {
        assert_eq!(to_wire_json(&Bson::Double(f64::NAN)), Value::Null);
    }
}
