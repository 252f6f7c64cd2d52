use std::{collections::HashMap, fmt, sync::LazyLock};

use log::trace;
use serde::Deserialize;

use crate::normalize_name;

const MATERIALS_JSON: &str = include_str!("../assets/materials.json");

static MATERIALS: LazyLock<MaterialRegistry> = LazyLock::new(|| {
    let entries: Vec<MaterialEntry> =
        serde_json::from_str(MATERIALS_JSON).expect("Could not parse materials.json registry.");
    MaterialRegistry::new(entries)
});

#[derive(Deserialize, Clone, Debug)]
struct MaterialEntry {
    id: u16,
    name: String,
    /// Placed-only blocks such as water or fire have no item form.
    #[serde(default = "default_true")]
    item: bool,
    #[serde(default = "default_max_stack")]
    max_stack: u8,
    #[serde(default)]
    max_durability: u16,
    /// Pre-flattening names, with `NAME:DATA` for materials that used a data value.
    #[serde(default)]
    legacy: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_max_stack() -> u8 {
    64
}

struct MaterialRegistry {
    // indexed by id
    entries: Vec<MaterialEntry>,
    by_name: HashMap<String, u16>,
    by_legacy_name: HashMap<String, u16>,
}

impl MaterialRegistry {
    fn new(entries: Vec<MaterialEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_legacy_name = HashMap::new();
        for entry in &entries {
            by_name.insert(entry.name.clone(), entry.id);
            for legacy in &entry.legacy {
                by_legacy_name.insert(legacy.clone(), entry.id);
            }
        }

        Self {
            entries,
            by_name,
            by_legacy_name,
        }
    }
}

/// The type of an item, e.g. stone or an enchanted book.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Material {
    id: u16,
}

impl Material {
    pub const AIR: Material = Material { id: 0 };
    pub const STONE: Material = Material { id: 1 };
    pub const ENCHANTED_BOOK: Material = Material { id: 47 };

    /// Matches a material by its current or legacy name.
    ///
    /// Legacy names may carry a data value, `WOOL:14` is red wool.
    /// A data value of `0` on a name without its own legacy entry is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = normalize_name(name);
        if let Some(material) = Self::lookup(&name) {
            return Some(material);
        }

        let (base, data) = name.split_once(':')?;
        if data == "0" {
            Self::lookup(base)
        } else {
            None
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        if let Some(&id) = MATERIALS.by_name.get(name) {
            return Some(Self { id });
        }

        let &id = MATERIALS.by_legacy_name.get(name)?;
        let material = Self { id };
        trace!("Resolved legacy material {} to {}", name, material);
        Some(material)
    }

    pub fn from_id(id: u16) -> Option<Self> {
        MATERIALS
            .entries
            .get(id as usize)
            .map(|entry| Self { id: entry.id })
    }

    fn entry(&self) -> &'static MaterialEntry {
        &MATERIALS.entries[self.id as usize]
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        &self.entry().name
    }

    /// Whether an item stack of this material can exist.
    pub fn is_item(&self) -> bool {
        self.entry().item
    }

    pub fn max_stack_size(&self) -> u8 {
        self.entry().max_stack
    }

    /// `0` for materials that cannot take damage.
    pub fn max_durability(&self) -> u16 {
        self.entry().max_durability
    }

    pub fn is_air(&self) -> bool {
        *self == Self::AIR
    }

    pub fn all() -> impl Iterator<Item = Material> {
        MATERIALS.entries.iter().map(|entry| Self { id: entry.id })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Material").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Material, MATERIALS};

    #[test]
    fn test_registry_ids_are_indices() {
        for (index, entry) in MATERIALS.entries.iter().enumerate() {
            assert_eq!(entry.id as usize, index, "{} is out of place", entry.name);
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(Material::AIR.name(), "AIR");
        assert_eq!(Material::STONE.name(), "STONE");
        assert_eq!(Material::ENCHANTED_BOOK.name(), "ENCHANTED_BOOK");
        assert!(Material::AIR.is_air());
        assert!(!Material::AIR.is_item());
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for material in Material::all() {
            assert_eq!(Material::from_name(material.name()), Some(material));
            assert_eq!(
                Material::from_name(&material.name().to_lowercase()),
                Some(material)
            );
        }
    }

    #[test]
    fn test_legacy_names() {
        let resolve = |name: &str| Material::from_name(name).map(|m| m.name());
        assert_eq!(resolve("WORKBENCH"), Some("CRAFTING_TABLE"));
        assert_eq!(resolve("WOOL:14"), Some("RED_WOOL"));
        assert_eq!(resolve("wool"), Some("WHITE_WOOL"));
        assert_eq!(resolve("STAINED_GLASS_PANE:15"), Some("BLACK_STAINED_GLASS_PANE"));
        assert_eq!(resolve("SKULL_ITEM:3"), Some("PLAYER_HEAD"));
        assert_eq!(resolve("GOLD_SWORD"), Some("GOLDEN_SWORD"));
    }

    #[test]
    fn test_zero_data_value() {
        assert_eq!(Material::from_name("DIAMOND:0"), Some(Material::from_name("DIAMOND").unwrap()));
        assert_eq!(Material::from_name("DIAMOND:1"), None);
        assert_eq!(Material::from_name("WOOL:16"), None);
    }

    #[test]
    fn test_unknown_material() {
        assert_eq!(Material::from_name("NOT_A_MATERIAL"), None);
        assert_eq!(Material::from_name(""), None);
    }

    #[test]
    fn test_item_properties() {
        let sword = Material::from_name("DIAMOND_SWORD").unwrap();
        assert_eq!(sword.max_stack_size(), 1);
        assert_eq!(sword.max_durability(), 1561);

        let pearl = Material::from_name("ENDER_PEARL").unwrap();
        assert_eq!(pearl.max_stack_size(), 16);
        assert_eq!(pearl.max_durability(), 0);

        assert!(!Material::from_name("WATER").unwrap().is_item());
        assert!(!Material::from_name("STATIONARY_LAVA").unwrap().is_item());
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Material::from_id(1), Some(Material::STONE));
        assert_eq!(Material::from_id(u16::MAX), None);
    }
}
