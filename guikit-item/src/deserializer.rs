//! Builds [`ItemStack`]s out of config sections.
//!
//! ```yaml
//! material: DIAMOND_SWORD
//! name: "&bExcalibur"
//! lore:
//!   - "&7Pulled from the stone"
//! enchantments:
//!   - SHARPNESS:5
//! item-flags:
//!   - HIDE_ENCHANTS
//! unbreakable: true
//! ```
//!
//! Placeholders are left untouched so the result can be cached,
//! see [`apply_placeholders_to_item_stack`].
//!
//! Every function without a `_with` suffix reads keys from the default
//! [`SectionNameTable`].

use std::collections::{BTreeMap, BTreeSet};

use guikit_config::{default_table, ConfigSection, SectionNameTable};
use guikit_core::{
    text::{parse_color, parse_color_lines, to_pretty_console},
    PlaceholderResolver,
};
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    enchantment::Enchantment, error::ItemStackError, item_flag::ItemFlag, item_stack::ItemStack,
    material::Material,
};

/// Level of the enchantment added to make an item glow.
const GLOW_ENCHANT_LEVEL: i32 = 1;

/// Reads only the material, as an item stack with empty metadata.
pub fn deserialize_material(section: &ConfigSection) -> Result<ItemStack, ItemStackError> {
    deserialize_material_with(section, &default_table())
}

pub fn deserialize_material_with(
    section: &ConfigSection,
    table: &SectionNameTable,
) -> Result<ItemStack, ItemStackError> {
    let name = section
        .get_string(&table.material)?
        .ok_or_else(|| ItemStackError::MissingField(section.full_key(&table.material)))?;

    let material =
        Material::from_name(&name).ok_or_else(|| ItemStackError::UnknownMaterial(name.clone()))?;
    if !material.is_item() {
        return Err(ItemStackError::UnparsableMaterial(name));
    }

    Ok(ItemStack::new(material))
}

/// Reads material, name, lore, enchantments, custom model data, unbreakable,
/// durability, glow, item flags and amount.
pub fn deserialize_item_stack(section: &ConfigSection) -> Result<ItemStack, ItemStackError> {
    deserialize_item_stack_with(section, &default_table())
}

pub fn deserialize_item_stack_with(
    section: &ConfigSection,
    table: &SectionNameTable,
) -> Result<ItemStack, ItemStackError> {
    let mut item = deserialize_material_with(section, table)?;

    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    meta.display_name = section.get_string(&table.display_name)?;
    meta.lore = section.get_string_list(&table.lore)?;
    item.set_item_meta(meta);

    parse_color_of_item_stack(&mut item)?;
    apply_enchantments_to_item_stack(&mut item, &deserialize_enchantments_with(section, table)?)?;

    // enchantments changed the metadata, fetch it again
    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    if let Some(data) = section.get_int(&table.custom_model_data)? {
        meta.custom_model_data =
            Some(i32::try_from(data).map_err(|_| ItemStackError::InvalidCustomModelData(data))?);
    }
    if section.get_bool(&table.unbreakable)? {
        meta.unbreakable = true;
    }
    if let Some(durability) = section.get_int(&table.durability)? {
        let damage = i16::try_from(durability)
            .map_err(|_| ItemStackError::InvalidDurability(durability))?;
        let max_durability = item.material().max_durability();
        if max_durability > 0 && i32::from(damage) > i32::from(max_durability) {
            warn!(
                "Durability {} of {} exceeds its maximum of {}",
                damage,
                item.material(),
                max_durability
            );
        }
        item.set_durability(damage);
    }
    if section.get_bool(&table.glow)? {
        meta.add_item_flags([ItemFlag::HideEnchants]);
        // real enchantments already make the item glow
        if !meta.has_enchants() {
            meta.add_enchant(Enchantment::PROTECTION, GLOW_ENCHANT_LEVEL, true);
        }
    }
    item.set_item_meta(meta);

    apply_item_flags_to_item_stack(&mut item, &deserialize_item_flags_with(section, table)?)?;

    let amount = section.get_int_or(&table.amount, 1)?;
    let amount = u8::try_from(amount).map_err(|_| ItemStackError::InvalidAmount(amount))?;
    if amount > item.material().max_stack_size() {
        warn!(
            "Amount {} of {} exceeds its stack size of {}",
            amount,
            item.material(),
            item.material().max_stack_size()
        );
    }
    item.set_amount(amount);

    debug!(
        "Deserialized {} x{} named '{}' from '{}'",
        item.material(),
        item.amount(),
        to_pretty_console(item.display_name().unwrap_or_default()),
        section.path()
    );
    Ok(item)
}

/// Translates `&` color codes in the display name and lore.
pub fn parse_color_of_item_stack(item: &mut ItemStack) -> Result<(), ItemStackError> {
    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    meta.display_name = meta.display_name.as_deref().map(parse_color);
    meta.lore = parse_color_lines(&meta.lore);
    item.set_item_meta(meta);
    Ok(())
}

/// Runs `resolver` over the display name and every lore line.
pub fn apply_placeholders_to_item_stack(
    item: &mut ItemStack,
    resolver: &impl PlaceholderResolver,
) -> Result<(), ItemStackError> {
    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    meta.display_name = meta.display_name.as_deref().map(|name| resolver.apply(name));
    meta.lore = resolver.apply_lines(&meta.lore);
    item.set_item_meta(meta);
    Ok(())
}

pub fn deserialize_item_flags(
    section: &ConfigSection,
) -> Result<BTreeSet<ItemFlag>, ItemStackError> {
    deserialize_item_flags_with(section, &default_table())
}

/// A `*` entry selects every flag, whatever else the list holds.
pub fn deserialize_item_flags_with(
    section: &ConfigSection,
    table: &SectionNameTable,
) -> Result<BTreeSet<ItemFlag>, ItemStackError> {
    let names = section.get_string_list(&table.item_flags)?;
    if names.iter().any(|name| name == "*") {
        return Ok(ItemFlag::ALL.into_iter().collect());
    }

    names
        .into_iter()
        .map(|name| {
            name.parse::<ItemFlag>()
                .map_err(|_| ItemStackError::UnknownItemFlag(name))
        })
        .collect()
}

pub fn apply_item_flags_to_item_stack(
    item: &mut ItemStack,
    flags: &BTreeSet<ItemFlag>,
) -> Result<(), ItemStackError> {
    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    if flags.is_empty() {
        return Ok(());
    }

    meta.add_item_flags(flags.iter().copied());
    item.set_item_meta(meta);
    Ok(())
}

pub fn deserialize_enchantments(
    section: &ConfigSection,
) -> Result<BTreeMap<Enchantment, i32>, ItemStackError> {
    deserialize_enchantments_with(section, &default_table())
}

/// The last entry wins when an enchantment is listed twice.
pub fn deserialize_enchantments_with(
    section: &ConfigSection,
    table: &SectionNameTable,
) -> Result<BTreeMap<Enchantment, i32>, ItemStackError> {
    section
        .get_string_list(&table.enchantments)?
        .iter()
        .map(|entry| deserialize_enchantment(entry))
        .collect()
}

/// Parses a single `NAME:LEVEL` entry.
pub fn deserialize_enchantment(entry: &str) -> Result<(Enchantment, i32), ItemStackError> {
    let (name, level) = entry
        .split(':')
        .map(str::trim)
        .collect_tuple()
        .ok_or_else(|| ItemStackError::MalformedEnchantmentEntry(entry.to_string()))?;

    let enchantment = Enchantment::from_name(name)
        .ok_or_else(|| ItemStackError::UnknownEnchantment(name.to_string()))?;
    let level = level.parse().map_err(|_| ItemStackError::InvalidLevel {
        entry: entry.to_string(),
        level: level.to_string(),
    })?;

    Ok((enchantment, level))
}

pub fn serialize_enchantment(enchantment: Enchantment, level: i32) -> String {
    format!("{}:{}", enchantment.name(), level)
}

pub fn serialize_enchantments(enchantments: &BTreeMap<Enchantment, i32>) -> Vec<String> {
    enchantments
        .iter()
        .map(|(&enchantment, &level)| serialize_enchantment(enchantment, level))
        .collect()
}

/// Enchanted books store the enchantments, every other item is enchanted directly.
/// Levels are never restricted.
pub fn apply_enchantments_to_item_stack(
    item: &mut ItemStack,
    enchantments: &BTreeMap<Enchantment, i32>,
) -> Result<(), ItemStackError> {
    if enchantments.is_empty() {
        return Ok(());
    }

    let mut meta = item.item_meta().ok_or(ItemStackError::NullMetadata)?;
    let storage = item.is_enchantment_storage();
    for (&enchantment, &level) in enchantments {
        if storage {
            meta.add_stored_enchant(enchantment, level, true);
        } else {
            meta.add_enchant(enchantment, level, true);
        }
    }
    debug!(
        "Applied {} to {}",
        serialize_enchantments(enchantments).iter().join(", "),
        item.material()
    );
    item.set_item_meta(meta);
    Ok(())
}
