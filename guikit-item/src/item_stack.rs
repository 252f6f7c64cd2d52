use std::collections::{BTreeMap, BTreeSet};

use crate::{enchantment::Enchantment, item_flag::ItemFlag, material::Material};

/// Display properties of an item.
///
/// [`ItemStack::item_meta`] hands out a copy, changes only take effect
/// once written back with [`ItemStack::set_item_meta`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub custom_model_data: Option<i32>,
    pub unbreakable: bool,
    enchants: BTreeMap<Enchantment, i32>,
    /// Enchantments an enchanted book carries, as opposed to ones applied to it.
    stored_enchants: BTreeMap<Enchantment, i32>,
    item_flags: BTreeSet<ItemFlag>,
}

impl ItemMeta {
    pub fn enchants(&self) -> &BTreeMap<Enchantment, i32> {
        &self.enchants
    }

    pub fn has_enchants(&self) -> bool {
        !self.enchants.is_empty()
    }

    /// Returns `false` when the level is out of range and the restriction is not ignored.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: i32,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && !(1..=enchantment.max_level()).contains(&level) {
            return false;
        }
        self.enchants.insert(enchantment, level);
        true
    }

    pub fn remove_enchant(&mut self, enchantment: Enchantment) -> bool {
        self.enchants.remove(&enchantment).is_some()
    }

    pub fn stored_enchants(&self) -> &BTreeMap<Enchantment, i32> {
        &self.stored_enchants
    }

    pub fn add_stored_enchant(
        &mut self,
        enchantment: Enchantment,
        level: i32,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && !(1..=enchantment.max_level()).contains(&level) {
            return false;
        }
        self.stored_enchants.insert(enchantment, level);
        true
    }

    pub fn item_flags(&self) -> &BTreeSet<ItemFlag> {
        &self.item_flags
    }

    pub fn has_item_flag(&self, flag: ItemFlag) -> bool {
        self.item_flags.contains(&flag)
    }

    pub fn add_item_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
        self.item_flags.extend(flags);
    }

    pub fn remove_item_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
        for flag in flags {
            self.item_flags.remove(&flag);
        }
    }

    /// The flags as the `HideFlags` bit mask older clients read.
    pub fn hide_flags(&self) -> u32 {
        self.item_flags
            .iter()
            .fold(0, |mask, flag| mask | flag.bit())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    material: Material,
    amount: u8,
    /// Damage taken, `None` until explicitly set.
    durability: Option<i16>,
    meta: Option<ItemMeta>,
}

impl ItemStack {
    /// A single item with empty metadata.
    ///
    /// Materials that are not items get no metadata at all.
    pub fn new(material: Material) -> Self {
        Self::with_amount(material, 1)
    }

    pub fn with_amount(material: Material, amount: u8) -> Self {
        Self {
            material,
            amount,
            durability: None,
            meta: material.is_item().then(ItemMeta::default),
        }
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u8) {
        self.amount = amount;
    }

    pub fn durability(&self) -> Option<i16> {
        self.durability
    }

    pub fn set_durability(&mut self, durability: i16) {
        self.durability = Some(durability);
    }

    pub fn has_item_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// A copy of the metadata, `None` if this material has none.
    pub fn item_meta(&self) -> Option<ItemMeta> {
        self.meta.clone()
    }

    /// Replaces the metadata. Returns `false` if this material cannot hold any.
    pub fn set_item_meta(&mut self, meta: ItemMeta) -> bool {
        match &mut self.meta {
            Some(current) => {
                *current = meta;
                true
            }
            None => false,
        }
    }

    /// Whether enchantments go into the stored enchantments instead of onto the item.
    pub fn is_enchantment_storage(&self) -> bool {
        self.material == Material::ENCHANTED_BOOK
    }

    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref()?.display_name.as_deref()
    }

    pub fn lore(&self) -> &[String] {
        self.meta
            .as_ref()
            .map(|meta| meta.lore.as_slice())
            .unwrap_or_default()
    }

    /// Enchantments applied to the item, empty for items without metadata.
    pub fn enchantments(&self) -> BTreeMap<Enchantment, i32> {
        self.meta
            .as_ref()
            .map(|meta| meta.enchants.clone())
            .unwrap_or_default()
    }
}
