use std::{fmt, str::FromStr};

use crate::normalize_name;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseItemFlagError;

/// Hides a part of the item tooltip.
///
/// The discriminant is the bit of the flag in the `HideFlags` mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ItemFlag {
    HideEnchants = 0,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    /// Potion effects, book authors, fireworks and other per-item details.
    HideAdditionalTooltip,
    HideDye,
    HideArmorTrim,
    HideStoredEnchants,
}

impl ItemFlag {
    pub const ALL: [ItemFlag; 9] = [
        ItemFlag::HideEnchants,
        ItemFlag::HideAttributes,
        ItemFlag::HideUnbreakable,
        ItemFlag::HideDestroys,
        ItemFlag::HidePlacedOn,
        ItemFlag::HideAdditionalTooltip,
        ItemFlag::HideDye,
        ItemFlag::HideArmorTrim,
        ItemFlag::HideStoredEnchants,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ItemFlag::HideEnchants => "HIDE_ENCHANTS",
            ItemFlag::HideAttributes => "HIDE_ATTRIBUTES",
            ItemFlag::HideUnbreakable => "HIDE_UNBREAKABLE",
            ItemFlag::HideDestroys => "HIDE_DESTROYS",
            ItemFlag::HidePlacedOn => "HIDE_PLACED_ON",
            ItemFlag::HideAdditionalTooltip => "HIDE_ADDITIONAL_TOOLTIP",
            ItemFlag::HideDye => "HIDE_DYE",
            ItemFlag::HideArmorTrim => "HIDE_ARMOR_TRIM",
            ItemFlag::HideStoredEnchants => "HIDE_STORED_ENCHANTS",
        }
    }

    pub const fn bit(&self) -> u32 {
        1 << (*self as u8)
    }
}

impl FromStr for ItemFlag {
    type Err = ParseItemFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "HIDE_ENCHANTS" => Ok(Self::HideEnchants),
            "HIDE_ATTRIBUTES" => Ok(Self::HideAttributes),
            "HIDE_UNBREAKABLE" => Ok(Self::HideUnbreakable),
            "HIDE_DESTROYS" => Ok(Self::HideDestroys),
            "HIDE_PLACED_ON" => Ok(Self::HidePlacedOn),
            // renamed in 1.20.5
            "HIDE_ADDITIONAL_TOOLTIP" | "HIDE_POTION_EFFECTS" => Ok(Self::HideAdditionalTooltip),
            "HIDE_DYE" => Ok(Self::HideDye),
            "HIDE_ARMOR_TRIM" => Ok(Self::HideArmorTrim),
            "HIDE_STORED_ENCHANTS" => Ok(Self::HideStoredEnchants),
            _ => Err(ParseItemFlagError),
        }
    }
}

impl fmt::Display for ItemFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
