//! Discriminated decoding of untyped asset payloads.
//!
//! Decoding happens in two passes: the payload is first parsed as a generic
//! JSON value so the `type` tag can be inspected, then the whole value is
//! deserialized into the selected variant. Either an entire [`Asset`] comes
//! back or an error does.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Asset, AssetKind, Audience, Chart, Insight};
use crate::error::DecodeError;

/// Name of the discriminator field.
pub const TYPE_FIELD: &str = "type";

/// Decode raw request bytes into an [`Asset`].
pub fn decode_asset(raw: &[u8]) -> Result<Asset, DecodeError> {
    let value: Value =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    decode_asset_value(value)
}

/// Decode an already-parsed JSON value into an [`Asset`].
pub fn decode_asset_value(value: Value) -> Result<Asset, DecodeError> {
    let kind = read_kind(&value)?;

    match kind {
        AssetKind::Chart => decode_variant::<Chart>(value).map(Asset::Chart),
        AssetKind::Insight => decode_variant::<Insight>(value).map(Asset::Insight),
        AssetKind::Audience => decode_variant::<Audience>(value).map(Asset::Audience),
    }
}

fn read_kind(value: &Value) -> Result<AssetKind, DecodeError> {
    let Value::Object(fields) = value else {
        return Err(DecodeError::Malformed(format!(
            "expected a JSON object, found {}",
            json_type_name(value)
        )));
    };

    match fields.get(TYPE_FIELD) {
        None => Err(DecodeError::UnknownKind(format!(
            "missing `{TYPE_FIELD}` field"
        ))),
        Some(Value::String(tag)) => {
            AssetKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownKind(tag.clone()))
        }
        Some(other) => Err(DecodeError::UnknownKind(other.to_string())),
    }
}

fn decode_variant<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::assets::Point;

    fn encode(asset: &Asset) -> Vec<u8> {
        serde_json::to_vec(asset).unwrap()
    }

    fn chart(points: Vec<Point>) -> Asset {
        Asset::Chart(Chart {
            id: 2,
            description: "Sample Chart".into(),
            title: "Sample Chart Title".into(),
            x_axis_title: "X-Axis".into(),
            y_axis_title: "Y-Axis".into(),
            data_points: points,
        })
    }

    // -----------------------------------------------------------------------
    // Round trips
    // -----------------------------------------------------------------------

    #[test]
    fn insight_round_trips() {
        let asset = Asset::Insight(Insight {
            id: 1,
            description: "Sample Insight".into(),
            text: "Sample Insight Text".into(),
        });
        assert_eq!(decode_asset(&encode(&asset)).unwrap(), asset);
    }

    #[test]
    fn chart_round_trips() {
        let asset = chart(vec![Point { x: 10.0, y: 10.0 }, Point { x: 20.25, y: -3.5 }]);
        assert_eq!(decode_asset(&encode(&asset)).unwrap(), asset);
    }

    #[test]
    fn chart_without_points_round_trips() {
        let asset = chart(vec![]);
        assert_eq!(decode_asset(&encode(&asset)).unwrap(), asset);
    }

    #[test]
    fn audience_round_trips() {
        let asset = Asset::Audience(Audience {
            id: 3,
            description: "Sample Audience".into(),
            age: 25,
            age_group: "26-40".into(),
            gender: "Female".into(),
            birth_country: "Portugal".into(),
            hours_spent_on_media: 18,
            number_of_purchases: 4,
        });
        assert_eq!(decode_asset(&encode(&asset)).unwrap(), asset);
    }

    // -----------------------------------------------------------------------
    // Discriminator handling
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_type_is_rejected() {
        let raw = br#"{"id":400,"type":"InvalidType","description":"x"}"#;
        assert_matches!(
            decode_asset(raw),
            Err(DecodeError::UnknownKind(tag)) if tag == "InvalidType"
        );
    }

    #[test]
    fn missing_type_is_unknown_kind() {
        let raw = br#"{"id":1,"description":"x","text":"y"}"#;
        assert_matches!(decode_asset(raw), Err(DecodeError::UnknownKind(_)));
    }

    #[test]
    fn non_string_type_is_unknown_kind() {
        let raw = br#"{"id":1,"type":3,"description":"x","text":"y"}"#;
        assert_matches!(decode_asset(raw), Err(DecodeError::UnknownKind(tag)) if tag == "3");
    }

    #[test]
    fn lowercase_type_is_unknown_kind() {
        let raw = br#"{"id":1,"type":"insight","description":"x","text":"y"}"#;
        assert_matches!(decode_asset(raw), Err(DecodeError::UnknownKind(_)));
    }

    // -----------------------------------------------------------------------
    // Malformed input
    // -----------------------------------------------------------------------

    #[test]
    fn invalid_json_is_malformed() {
        assert_matches!(decode_asset(b"{\"id\": 1,"), Err(DecodeError::Malformed(_)));
        assert_matches!(decode_asset(b""), Err(DecodeError::Malformed(_)));
    }

    #[test]
    fn non_object_is_malformed() {
        assert_matches!(
            decode_asset(b"[1, 2, 3]"),
            Err(DecodeError::Malformed(msg)) if msg.contains("an array")
        );
    }

    #[test]
    fn field_type_mismatch_is_malformed() {
        let raw = br#"{"id":"one","type":"Insight","description":"x","text":"y"}"#;
        assert_matches!(decode_asset(raw), Err(DecodeError::Malformed(_)));
    }

    #[test]
    fn negative_counter_is_malformed() {
        let value = json!({
            "id": 3,
            "type": "Audience",
            "description": "x",
            "age": -1,
            "ageGroup": "0-17",
            "gender": "Male",
            "birthCountry": "Chad",
            "hoursSpentOnMedia": 1,
            "numberOfPurchases": 1,
        });
        assert_matches!(decode_asset_value(value), Err(DecodeError::Malformed(_)));
    }

    #[test]
    fn missing_variant_field_is_malformed() {
        let raw = br#"{"id":1,"type":"Insight","description":"x"}"#;
        assert_matches!(
            decode_asset(raw),
            Err(DecodeError::Malformed(msg)) if msg.contains("text")
        );
    }

    #[test]
    fn point_with_string_coordinate_is_malformed() {
        let value = json!({
            "id": 2,
            "type": "Chart",
            "description": "x",
            "title": "t",
            "xAxisTitle": "a",
            "yAxisTitle": "b",
            "dataPoints": [{"x": "1", "y": 2}],
        });
        assert_matches!(decode_asset_value(value), Err(DecodeError::Malformed(_)));
    }

    // -----------------------------------------------------------------------
    // Accepted variations
    // -----------------------------------------------------------------------

    #[test]
    fn legacy_chart_field_names_are_accepted() {
        let value = json!({
            "id": 2,
            "type": "Chart",
            "description": "Sample Chart",
            "title": "Sample Chart Title",
            "xAxesTitle": "X-Axis",
            "yAxesTitle": "Y-Axis",
            "dataPoints": [{"X": 10, "Y": 10}],
        });
        let decoded = decode_asset_value(value).unwrap();
        assert_eq!(decoded, chart(vec![Point { x: 10.0, y: 10.0 }]));
    }

    #[test]
    fn unrecognised_fields_are_ignored() {
        let raw = br#"{"id":1,"type":"Insight","description":"x","text":"y","extra":true}"#;
        let decoded = decode_asset(raw).unwrap();
        assert_eq!(decoded.id(), 1);
        assert_eq!(decoded.kind(), AssetKind::Insight);
    }
}
