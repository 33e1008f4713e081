//! Shared parsing for `--meta KEY=VALUE` arguments.

use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// Parse repeated `KEY=VALUE` pairs into a JSON object.
///
/// Values that parse as JSON (numbers, booleans, quoted strings, arrays)
/// are taken as such; anything else is a plain string, so
/// `--meta title=My Video` and `--meta sequence=3` both do what they look
/// like they do.
pub fn parse_key_values(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid --meta argument {pair:?}: expected KEY=VALUE");
        };
        if key.is_empty() {
            bail!("invalid --meta argument {pair:?}: empty key");
        }
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| Value::String(value.to_string()));
        map.insert(key.to_string(), value);
    }
    Ok(map)
}
