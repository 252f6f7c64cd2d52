use thiserror::Error;

pub mod section;
pub mod table;

pub use section::ConfigSection;
pub use table::{default_table, set_default_table, LoadTomlConfiguration, SectionNameTable};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Value at '{key}' is not {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("Invalid section name table: {0}")]
    InvalidTable(String),
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Error parsing toml: {0}")]
    Toml(#[from] toml::de::Error),
}
