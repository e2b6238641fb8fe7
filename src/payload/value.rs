//! Zugriffshelfer auf lose typisierte JSON-Werte.
//!
//! Container (Objekte/Listen) werden streng geprüft, Skalare tolerant gelesen.

use super::PayloadError;
use serde_json::{Map, Value};

pub(crate) type JsonObject = Map<String, Value>;

/// JSON-Typname für Fehlermeldungen
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

pub(crate) fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

/// Wert muss ein Objekt sein
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a JsonObject, PayloadError> {
    value
        .as_object()
        .ok_or_else(|| PayloadError::shape(display_path(path), "object", type_name(value)))
}

/// Optionales Objekt unter `key`: fehlend/null → `None`, anderer Typ → Fehler
pub(crate) fn optional_object<'a>(
    parent: &'a JsonObject,
    key: &str,
    path: &str,
) -> Result<Option<&'a JsonObject>, PayloadError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(obj)),
        Some(other) => Err(PayloadError::shape(
            child_path(path, key),
            "object",
            type_name(other),
        )),
    }
}

/// Optionale Liste unter `key`: fehlend/null → leer, anderer Typ → Fehler
pub(crate) fn optional_list<'a>(
    parent: &'a JsonObject,
    key: &str,
    path: &str,
) -> Result<&'a [Value], PayloadError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(PayloadError::shape(
            child_path(path, key),
            "list",
            type_name(other),
        )),
    }
}

/// Normalisiert jedes Listenelement; Elemente müssen Objekte sein.
pub(crate) fn map_entries<T>(
    items: &[Value],
    path: &str,
    mut normalize: impl FnMut(&JsonObject, &str) -> Result<T, PayloadError>,
) -> Result<Vec<T>, PayloadError> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item_path = format!("{}[{}]", path, idx);
            let obj = expect_object(item, &item_path)?;
            normalize(obj, &item_path)
        })
        .collect()
}

/// Liest eine Zahl; Zahl-Strings werden geparst, alles andere ergibt 0.
pub(crate) fn lenient_f64(value: Option<&Value>, path: &str) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                if !s.trim().is_empty() {
                    log::debug!("{}: '{}' ist keine Zahl, verwende 0", path, s);
                }
                0.0
            }
        },
        Some(other) => {
            log::debug!("{}: {} statt Zahl, verwende 0", path, type_name(other));
            0.0
        }
    }
}

pub(crate) fn number_field(obj: &JsonObject, key: &str, path: &str) -> f64 {
    lenient_f64(obj.get(key), &child_path(path, key))
}

/// Erste vorhandene Variante eines Feldnamens (z.B. Tippfehler im Backend).
pub(crate) fn number_field_any(obj: &JsonObject, keys: &[&str], path: &str) -> f64 {
    keys.iter()
        .find(|key| obj.get(**key).is_some_and(|v| !v.is_null()))
        .map(|key| number_field(obj, key, path))
        .unwrap_or(0.0)
}

/// Liest eine nicht-negative Ganzzahl (Stunden, Zähler).
pub(crate) fn u32_field(obj: &JsonObject, key: &str, path: &str) -> u32 {
    let value = number_field(obj, key, path);
    if value.is_finite() && value >= 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Liest einen String; Zahlen und Bools werden in ihre Textform gewandelt.
pub(crate) fn lenient_string(value: Option<&Value>, path: &str) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            log::debug!(
                "{}: {} statt String, verwende leeren String",
                path,
                type_name(other)
            );
            String::new()
        }
    }
}

pub(crate) fn string_field(obj: &JsonObject, key: &str, path: &str) -> String {
    lenient_string(obj.get(key), &child_path(path, key))
}

/// Optionaler String: fehlend/null → `None`
pub(crate) fn optional_string_field(obj: &JsonObject, key: &str, path: &str) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        value => Some(lenient_string(value, &child_path(path, key))),
    }
}

/// Pfad für Fehlermeldungen; die Wurzel heißt `$`.
fn display_path(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}
