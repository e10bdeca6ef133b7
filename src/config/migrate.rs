//! Bring an older configuration file up to the current set of keys.
//! Unknown keys and existing values are left untouched.

use crate::errors::{AppError, AppResult};
use crate::models::settings::{DEFAULT_CURRENCY_SUFFIX, DEFAULT_HOURLY_WAGE, DEFAULT_PAYDAY};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file should carry, with the value written when missing.
fn required_keys() -> Vec<(&'static str, Value)> {
    vec![
        (
            "default_hourly_wage",
            Value::Number(DEFAULT_HOURLY_WAGE.into()),
        ),
        (
            "payday_day_of_month",
            Value::Number(u64::from(DEFAULT_PAYDAY).into()),
        ),
        (
            "currency_suffix",
            Value::String(DEFAULT_CURRENCY_SUFFIX.to_string()),
        ),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

/// Names of the required keys absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(required_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String((*k).to_string())))
        .map(|(k, _)| k)
        .collect())
}

/// Add the missing keys with their defaults and rewrite the file.
/// Returns the keys that were added (empty when nothing changed).
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in required_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    // Document the payday key right after it
    let mut content = String::new();
    for line in serialized.lines() {
        content.push_str(line);
        content.push('\n');
        if line.starts_with("payday_day_of_month:") {
            content.push_str("# payday: day of month (1-31), display only\n");
        }
    }

    fs::write(path, content).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}
