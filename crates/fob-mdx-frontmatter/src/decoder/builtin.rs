//! Built-in YAML and TOML decoders

use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Number, Value};

use super::Decoder;

/// YAML decoder backed by serde-saphyr
///
/// serde-saphyr is panic-free on untrusted input. Empty documents and an
/// explicit `null` decode to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl Decoder for YamlDecoder {
    fn decode(&self, raw: &str) -> Result<Option<Value>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let data: Value =
            serde_saphyr::from_str(raw).context("Failed to parse YAML frontmatter")?;

        Ok((!data.is_null()).then_some(data))
    }
}

/// TOML decoder backed by the toml crate
///
/// A TOML document is always a table, so this never yields a scalar.
/// Datetimes are kept as their RFC 3339 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

impl Decoder for TomlDecoder {
    fn decode(&self, raw: &str) -> Result<Option<Value>> {
        let table: toml::Table = toml::from_str(raw).context("Failed to parse TOML frontmatter")?;

        let mut object = Map::with_capacity(table.len());
        for (key, value) in table {
            object.insert(key, toml_to_json(value)?);
        }

        Ok(Some(Value::Object(object)))
    }
}

fn toml_to_json(value: toml::Value) -> Result<Value> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| anyhow!("TOML frontmatter float {f} cannot be represented as JSON"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        toml::Value::Table(table) => {
            let mut object = Map::with_capacity(table.len());
            for (key, value) in table {
                object.insert(key, toml_to_json(value)?);
            }
            Value::Object(object)
        }
    })
}
