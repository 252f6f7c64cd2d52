use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::Deserialize;

use crate::normalize_name;

const ENCHANTMENTS_JSON: &str = include_str!("../assets/enchantments.json");

static ENCHANTMENTS: LazyLock<EnchantmentRegistry> = LazyLock::new(|| {
    let entries: Vec<EnchantmentEntry> = serde_json::from_str(ENCHANTMENTS_JSON)
        .expect("Could not parse enchantments.json registry.");
    EnchantmentRegistry::new(entries)
});

#[derive(Deserialize, Clone, Debug)]
struct EnchantmentEntry {
    id: u8,
    name: String,
    /// The old Bukkit constant, e.g. `DAMAGE_ALL` for sharpness.
    legacy: Option<String>,
    max_level: i32,
}

struct EnchantmentRegistry {
    entries: Vec<EnchantmentEntry>,
    by_name: HashMap<String, u8>,
}

impl EnchantmentRegistry {
    fn new(entries: Vec<EnchantmentEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len() * 2);
        for entry in &entries {
            by_name.insert(entry.name.clone(), entry.id);
            if let Some(legacy) = &entry.legacy {
                by_name.insert(legacy.clone(), entry.id);
            }
        }
        Self { entries, by_name }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Enchantment {
    id: u8,
}

impl Enchantment {
    pub const PROTECTION: Enchantment = Enchantment { id: 0 };
    pub const SHARPNESS: Enchantment = Enchantment { id: 13 };

    /// Matches both current names (`SHARPNESS`, `minecraft:sharpness`) and
    /// legacy Bukkit names (`DAMAGE_ALL`).
    pub fn from_name(name: &str) -> Option<Self> {
        ENCHANTMENTS
            .by_name
            .get(&normalize_name(name))
            .map(|&id| Self { id })
    }

    fn entry(&self) -> &'static EnchantmentEntry {
        &ENCHANTMENTS.entries[self.id as usize]
    }

    pub fn name(&self) -> &'static str {
        &self.entry().name
    }

    pub fn legacy_name(&self) -> Option<&'static str> {
        self.entry().legacy.as_deref()
    }

    /// Highest level obtainable without commands.
    pub fn max_level(&self) -> i32 {
        self.entry().max_level
    }

    pub fn all() -> impl Iterator<Item = Enchantment> {
        ENCHANTMENTS.entries.iter().map(|entry| Self { id: entry.id })
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Enchantment").field(&self.name()).finish()
    }
}
