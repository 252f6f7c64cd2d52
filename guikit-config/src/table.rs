use std::{fs, path::Path, sync::LazyLock};

use log::{debug, warn};
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::ConfigError;

static DEFAULT_TABLE: LazyLock<RwLock<SectionNameTable>> =
    LazyLock::new(|| RwLock::new(SectionNameTable::default()));

/// A snapshot of the process-wide default table.
pub fn default_table() -> SectionNameTable {
    DEFAULT_TABLE.read().clone()
}

/// Replaces the table used by callers that do not pass their own.
pub fn set_default_table(table: SectionNameTable) {
    debug!("replacing default section name table: {table:?}");
    *DEFAULT_TABLE.write() = table;
}

/// The keys an item section is read from.
///
/// Plugins rename these to match their own config schema,
/// e.g. `type` instead of `material` or `display-name` instead of `name`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SectionNameTable {
    pub material: String,
    pub display_name: String,
    pub lore: String,
    pub amount: String,
    /// Damage value on the item stack.
    pub durability: String,
    /// List of `NAME:LEVEL` entries.
    pub enchantments: String,
    /// List of flag names, `*` selects every flag.
    pub item_flags: String,
    pub custom_model_data: String,
    pub unbreakable: String,
    /// Makes the item shine without showing an enchantment.
    pub glow: String,
}

impl Default for SectionNameTable {
    fn default() -> Self {
        Self {
            material: "material".to_string(),
            display_name: "name".to_string(),
            lore: "lore".to_string(),
            amount: "amount".to_string(),
            durability: "durability".to_string(),
            enchantments: "enchantments".to_string(),
            item_flags: "item-flags".to_string(),
            custom_model_data: "custom-model-data".to_string(),
            unbreakable: "unbreakable".to_string(),
            glow: "glow".to_string(),
        }
    }
}

impl SectionNameTable {
    fn keys(&self) -> [(&'static str, &str); 10] {
        [
            ("material", self.material.as_str()),
            ("display-name", self.display_name.as_str()),
            ("lore", self.lore.as_str()),
            ("amount", self.amount.as_str()),
            ("durability", self.durability.as_str()),
            ("enchantments", self.enchantments.as_str()),
            ("item-flags", self.item_flags.as_str()),
            ("custom-model-data", self.custom_model_data.as_str()),
            ("unbreakable", self.unbreakable.as_str()),
            ("glow", self.glow.as_str()),
        ]
    }
}

pub trait LoadTomlConfiguration {
    /// Reads the file at `path`, or writes the defaults there when it does not exist.
    fn load_toml(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config = if path.exists() {
            let file_content = fs::read_to_string(path)?;
            toml::from_str(&file_content)?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for SectionNameTable {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.keys().iter().find(|(_, key)| key.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::InvalidTable(format!(
                "the key for '{field}' is empty"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::{default_table, set_default_table, LoadTomlConfiguration, SectionNameTable};
    use crate::ConfigError;

    #[test]
    fn test_default_keys() {
        let table = SectionNameTable::default();
        assert_eq!(table.material, "material");
        assert_eq!(table.display_name, "name");
        assert_eq!(table.item_flags, "item-flags");
        assert_eq!(table.custom_model_data, "custom-model-data");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let table: SectionNameTable =
            toml::from_str("material = \"type\"\ndisplay-name = \"display-name\"\n").unwrap();
        assert_eq!(table.material, "type");
        assert_eq!(table.display_name, "display-name");
        assert_eq!(table.lore, "lore");
        assert_eq!(table.glow, "glow");
    }

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.toml");

        let table = SectionNameTable::load_toml(&path).unwrap();
        assert_eq!(table, SectionNameTable::default());
        assert!(path.exists());

        fs::write(&path, "lore = \"description\"\n").unwrap();
        let table = SectionNameTable::load_toml(&path).unwrap();
        assert_eq!(table.lore, "description");
        assert_eq!(table.material, "material");
    }

    #[test]
    fn test_load_rejects_empty_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.toml");
        fs::write(&path, "amount = \" \"\n").unwrap();

        match SectionNameTable::load_toml(&path) {
            Err(ConfigError::InvalidTable(message)) => assert!(message.contains("amount")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.toml");
        fs::write(&path, "material = [").unwrap();
        assert!(matches!(
            SectionNameTable::load_toml(&path),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_replace_default_table() {
        let custom = SectionNameTable {
            material: "type".to_string(),
            ..Default::default()
        };
        set_default_table(custom.clone());
        assert_eq!(default_table(), custom);

        set_default_table(SectionNameTable::default());
        assert_eq!(default_table().material, "material");
    }
}
