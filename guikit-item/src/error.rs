use guikit_config::ConfigError;
use thiserror::Error;

/// Everything that can be wrong with an item section.
///
/// These are mistakes in the config, so none of them are retried.
#[derive(Error, Debug)]
pub enum ItemStackError {
    #[error("Missing required key '{0}'")]
    MissingField(String),
    #[error("Material could not be found: {0}")]
    UnknownMaterial(String),
    #[error("Material cannot be used as an item stack: {0}")]
    UnparsableMaterial(String),
    #[error("Enchantment must be written as NAME:LEVEL, got '{0}'")]
    MalformedEnchantmentEntry(String),
    #[error("Enchantment could not be found: {0}")]
    UnknownEnchantment(String),
    #[error("Level of enchantment '{entry}' is not an integer: {level}")]
    InvalidLevel { entry: String, level: String },
    #[error("Item flag could not be found: {0}")]
    UnknownItemFlag(String),
    #[error("Item has no metadata")]
    NullMetadata,
    #[error("Amount must be between 0 and 255, got {0}")]
    InvalidAmount(i64),
    #[error("Durability does not fit a 16 bit damage value: {0}")]
    InvalidDurability(i64),
    #[error("Custom model data does not fit a 32 bit integer: {0}")]
    InvalidCustomModelData(i64),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
