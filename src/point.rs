//! Concrete waypoint record.
//!
//! Mirrors the records produced by geocoding/import layers, where
//! coordinates often arrive as numeric strings. Parsing happens at the
//! boundary; inside the planner coordinates are always `f64`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::traits::Waypoint;

/// A visitable location with stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lng: f64,
    #[serde(default, alias = "is_origin")]
    pub is_origin: bool,
}

impl Point {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            lat,
            lng,
            is_origin: false,
        }
    }

    /// Marks this point as the route origin.
    pub fn origin(mut self) -> Self {
        self.is_origin = true;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Waypoint for Point {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    fn is_origin(&self) -> bool {
        self.is_origin
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

/// Accepts either a JSON number or a numeric string.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCoordinate::deserialize(deserializer)? {
        RawCoordinate::Number(value) => Ok(value),
        RawCoordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("invalid coordinate {:?}: {}", text, err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let point = Point::new("depot", "Depot", -23.5, -46.6)
            .origin()
            .with_address("Rua Direita, 1");
        assert!(point.is_origin());
        assert_eq!(point.address(), Some("Rua Direita, 1"));
        assert_eq!(point.location(), (-23.5, -46.6));
    }

    #[test]
    fn test_deserialize_numeric_strings() {
        let json = r#"{"id":"1","name":"Sé","lat":"-23.5503","lng":" -46.6339 ","isOrigin":true}"#;
        let point: Point = serde_json::from_str(json).unwrap();
        assert_eq!(point.lat, -23.5503);
        assert_eq!(point.lng, -46.6339);
        assert!(point.is_origin);
        assert_eq!(point.address, None);
    }

    #[test]
    fn test_deserialize_numbers_and_defaults() {
        let json = r#"{"id":"2","name":"MASP","address":"Av. Paulista, 1578","lat":-23.5614,"lng":-46.6559}"#;
        let point: Point = serde_json::from_str(json).unwrap();
        assert_eq!(point.location(), (-23.5614, -46.6559));
        assert!(!point.is_origin);
        assert_eq!(point.address(), Some("Av. Paulista, 1578"));
    }

    #[test]
    fn test_deserialize_snake_case_origin_flag() {
        let json = r#"{"id":"3","name":"Depot","lat":0,"lng":0,"is_origin":true}"#;
        let point: Point = serde_json::from_str(json).unwrap();
        assert!(point.is_origin);
    }

    #[test]
    fn test_deserialize_rejects_garbage_coordinate() {
        let json = r#"{"id":"4","name":"Bad","lat":"north","lng":0}"#;
        let result: Result<Point, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_emits_numbers() {
        let point = Point::new("5", "Luz", -23.5347, -46.6352);
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["lat"], serde_json::json!(-23.5347));
        assert_eq!(value["isOrigin"], serde_json::json!(false));
        assert!(value.get("address").is_none());
    }
}
