use std::{fs, path::Path};

use serde_yaml::{Mapping, Value};

use crate::ConfigError;

/// Separates the keys of nested sections in a path, `icons.close.material`.
pub const PATH_SEPARATOR: char = '.';

/// A read-only view over a YAML mapping.
///
/// Getters treat an explicit `null` the same as a missing key.
/// A value of the wrong type is an error rather than a silent default,
/// so that config authors learn about typos.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigSection {
    /// Full path of this section from the document root, empty for the root.
    path: String,
    root: Mapping,
}

impl ConfigSection {
    pub fn new(root: Mapping) -> Self {
        Self {
            path: String::new(),
            root,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(root) => Ok(Self::new(root)),
            Value::Null => Ok(Self::default()),
            _ => Err(ConfigError::WrongType {
                key: String::new(),
                expected: "a mapping",
            }),
        }
    }

    pub fn load_yaml(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Path of this section from the document root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Keys directly under this section, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().filter_map(Value::as_str)
    }

    /// Whether `key` is present with a non-null value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a value, walking nested mappings for dotted keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = &self.root;
        let mut parts = key.split(PATH_SEPARATOR).peekable();
        loop {
            let value = current.get(parts.next()?)?;
            if parts.peek().is_none() {
                return (!value.is_null()).then_some(value);
            }
            current = value.as_mapping()?;
        }
    }

    /// Scalars (strings, numbers and booleans) are returned as text.
    pub fn get_string(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.get(key)
            .map(|value| scalar_to_string(value).ok_or_else(|| self.wrong_type(key, "a string")))
            .transpose()
    }

    /// A missing key is an empty list.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        let Some(entries) = value.as_sequence() else {
            return Err(self.wrong_type(key, "a list of strings"));
        };

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                scalar_to_string(entry)
                    .ok_or_else(|| self.wrong_type(&format!("{key}[{index}]"), "a string"))
            })
            .collect()
    }

    /// A missing key is `false`.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.wrong_type(key, "a boolean")),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        self.get(key)
            .map(|value| value.as_i64().ok_or_else(|| self.wrong_type(key, "an integer")))
            .transpose()
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        Ok(self.get_int(key)?.unwrap_or(default))
    }

    /// The nested mapping at `key`, if there is one.
    pub fn get_section(&self, key: &str) -> Result<Option<ConfigSection>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Some(mapping) = value.as_mapping() else {
            return Err(self.wrong_type(key, "a section"));
        };

        Ok(Some(ConfigSection {
            path: self.full_key(key),
            root: mapping.clone(),
        }))
    }

    /// `key` prefixed with the path of this section, for error messages.
    pub fn full_key(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}{PATH_SEPARATOR}{key}", self.path)
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::WrongType {
            key: self.full_key(key),
            expected,
        }
    }
}

impl From<Mapping> for ConfigSection {
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
