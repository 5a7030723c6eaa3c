//! Persisted shape of a watcher.
//!
//! ```json
//! {"id": "k3x9", "name": "score", "visible": true, "value": 10,
//!  "variant": "slider", "minValue": 0, "maxValue": 100,
//!  "isCloudSynced": false, "ownerObjectId": null, "x": -230, "y": -115}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use varwatch_core::{WatchError, json_type_name};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    #[default]
    Simple,
    Timer,
    Answer,
    Slider,
    List,
}

/// Placement groups. Auto-placement counts siblings within a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Variables,
    Lists,
}

impl VariantKind {
    pub fn family(self) -> Family {
        match self {
            VariantKind::List => Family::Lists,
            _ => Family::Variables,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl Value {
    /// Numeric reading. Numeric-looking text counts; `inf`/`NaN` spellings don't.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Value::Text(s) => s.parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Numeric text becomes a number, empty text becomes 0, anything else stays.
    pub fn normalized(self) -> Value {
        match self {
            Value::Text(s) if s.is_empty() => Value::Number(0.0),
            Value::Text(s) => match s.parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::Text(s),
            },
            n => n,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(deserialize_with = "data_as_string")]
    pub data: String,
}

impl ListItem {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

// Blocks push numbers and booleans into lists as often as strings.
fn data_as_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn default_visible() -> bool {
    true
}

fn visible_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(true))
}

fn false_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

// Falsy values read as 0; any other scalar keeps its text.
fn value_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<Value, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Value::Number(0.0),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::Text(s),
        other => Value::Text(other.to_string()),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableModel {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_visible", deserialize_with = "visible_or_default")]
    pub visible: bool,
    #[serde(default, deserialize_with = "value_or_zero")]
    pub value: Value,
    #[serde(default)]
    pub variant: VariantKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, deserialize_with = "false_if_null")]
    pub is_cloud_synced: bool,
    #[serde(default)]
    pub owner_object_id: Option<String>,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

impl VariableModel {
    pub fn new(name: impl Into<String>, variant: VariantKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            visible: true,
            value: Value::default(),
            variant,
            width: None,
            height: None,
            items: None,
            min_value: None,
            max_value: None,
            is_cloud_synced: false,
            owner_object_id: None,
            x: None,
            y: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(ListItem::new).collect());
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn owned_by(mut self, object_id: impl Into<String>) -> Self {
        self.owner_object_id = Some(object_id.into());
        self
    }

    pub fn cloud(mut self, synced: bool) -> Self {
        self.is_cloud_synced = synced;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Builds a model from untyped project JSON. `name` and `visible` are
    /// checked up front so a caller bug surfaces as a precise error instead of
    /// a generic decode failure.
    pub fn from_json(json: serde_json::Value) -> Result<Self, WatchError> {
        match json.get("name") {
            Some(serde_json::Value::String(_)) => {}
            other => {
                return Err(WatchError::InvalidName {
                    found: json_type_name(other),
                });
            }
        }
        match json.get("visible") {
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(_)) => {}
            other => {
                return Err(WatchError::InvalidVisibility {
                    found: json_type_name(other),
                });
            }
        }
        Ok(serde_json::from_value(json)?)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Every field is a plain scalar, string or list of strings.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_normalization() {
        assert_eq!(Value::from("12.5").normalized(), Value::Number(12.5));
        assert_eq!(Value::from("").normalized(), Value::Number(0.0));
        assert_eq!(Value::from("apple").normalized(), Value::from("apple"));
        assert_eq!(Value::from("NaN").normalized(), Value::from("NaN"));
        assert_eq!(Value::from("3").as_number(), Some(3.0));
        assert_eq!(Value::from("inf").as_number(), None);
    }

    #[test]
    fn test_from_json_rejects_non_string_name() {
        let err = VariableModel::from_json(json!({"name": 5})).unwrap_err();
        assert!(matches!(err, WatchError::InvalidName { found: "a number" }));

        let err = VariableModel::from_json(json!({"value": 1})).unwrap_err();
        assert!(matches!(err, WatchError::InvalidName { found: "nothing" }));
    }

    #[test]
    fn test_from_json_rejects_non_bool_visible() {
        let err = VariableModel::from_json(json!({"name": "a", "visible": "yes"})).unwrap_err();
        assert!(matches!(
            err,
            WatchError::InvalidVisibility { found: "a string" }
        ));
    }

    #[test]
    fn test_from_json_defaults() {
        let m = VariableModel::from_json(json!({"name": "a", "visible": null})).unwrap();
        assert!(m.visible);
        assert_eq!(m.variant, VariantKind::Simple);
        assert_eq!(m.value, Value::Number(0.0));
        assert_eq!(m.x, None);
        assert!(!m.is_cloud_synced);
    }

    #[test]
    fn test_from_json_tolerates_null_fields() {
        let m = VariableModel::from_json(json!({
            "name": "a",
            "value": null,
            "isCloudSynced": null,
            "ownerObjectId": null,
            "x": null
        }))
        .unwrap();
        assert_eq!(m.value, Value::Number(0.0));
        assert!(!m.is_cloud_synced);
        assert_eq!(m.owner_object_id, None);
        assert_eq!(m.x, None);
    }

    #[test]
    fn test_from_json_boolean_values() {
        let m = VariableModel::from_json(json!({"name": "a", "value": true})).unwrap();
        assert_eq!(m.value, Value::from("true"));
        let m = VariableModel::from_json(json!({"name": "a", "value": false})).unwrap();
        assert_eq!(m.value, Value::Number(0.0));
        let m = VariableModel::from_json(json!({"name": "a", "value": "7", "isCloudSynced": true}))
            .unwrap();
        assert_eq!(m.value, Value::from("7"));
        assert!(m.is_cloud_synced);
    }

    #[test]
    fn test_list_items_accept_scalars() {
        let m = VariableModel::from_json(json!({
            "name": "bag",
            "variant": "list",
            "items": [{"data": "apple"}, {"data": 3}, {"data": true}]
        }))
        .unwrap();
        let items = m.items.unwrap();
        assert_eq!(items[0].data, "apple");
        assert_eq!(items[1].data, "3");
        assert_eq!(items[2].data, "true");
    }

    #[test]
    fn test_serialized_shape() {
        let m = VariableModel::new("speed", VariantKind::Slider)
            .with_id("s1")
            .with_value(5.0)
            .with_bounds(0.0, 10.0);
        let v = m.to_json();
        assert_eq!(v["variant"], "slider");
        assert_eq!(v["minValue"], 0.0);
        assert_eq!(v["maxValue"], 10.0);
        assert_eq!(v["isCloudSynced"], false);
        assert!(v["x"].is_null());
        assert!(v["ownerObjectId"].is_null());
        assert!(v.get("items").is_none());
        assert!(v.get("width").is_none());
    }
}
