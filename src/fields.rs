use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

/// Whether a parameter must always be sent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Presence {
    Required,
    /// Omitted from the wire when absent.
    Optional,
}

/// Association of one in-memory attribute with its wire key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub wire_key: &'static str,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str, wire_key: &'static str) -> Self {
        Self {
            name,
            wire_key,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, wire_key: &'static str) -> Self {
        Self {
            name,
            wire_key,
            presence: Presence::Optional,
        }
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// Static field table of a method or an object.
pub trait FieldMap {
    const FIELDS: &'static [Field];

    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }

    fn wire_key(name: &str) -> Option<&'static str> {
        Self::field(name).map(|field| field.wire_key)
    }
}

/// Wire contract of a method: where it is sent and which fields it carries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WireContract {
    pub path: &'static str,
    pub required: Vec<&'static Field>,
    pub optional: Vec<&'static Field>,
}

impl WireContract {
    pub fn of<T: FieldMap>(path: &'static str) -> Self {
        let (required, optional) = T::FIELDS.iter().partition(|field| field.is_required());
        Self {
            path,
            required,
            optional,
        }
    }
}

/// Serializes `value` into the top-level field map sent on the wire.
///
/// Absent optional fields are dropped, required ones are kept even when null.
/// Fails when the serialized value is not an object, or when its keys disagree with
/// the field table of `T`.
pub fn to_wire_fields<T>(value: &T) -> Result<Map<String, Value>, serde_json::Error>
where
    T: Serialize + FieldMap + ?Sized,
{
    let mut map = match serde_json::to_value(value)? {
        Value::Object(map) => map,
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a JSON object, got {other}"
            )))
        }
    };

    if let Some(key) = map
        .keys()
        .find(|key| !T::FIELDS.iter().any(|field| field.wire_key == key.as_str()))
    {
        return Err(serde_json::Error::custom(format!(
            "field `{key}` has no wire mapping"
        )));
    }

    for field in T::FIELDS {
        match field.presence {
            Presence::Required if !map.contains_key(field.wire_key) => {
                return Err(serde_json::Error::custom(format!(
                    "required field `{}` is missing",
                    field.wire_key
                )));
            }
            Presence::Optional if matches!(map.get(field.wire_key), Some(Value::Null)) => {
                map.remove(field.wire_key);
            }
            _ => {}
        }
    }

    Ok(map)
}

/// Wire form of a numeric chat identifier. Chat ids always travel as strings.
pub fn numeric_chat_id(chat_id: i64) -> String {
    chat_id.to_string()
}
