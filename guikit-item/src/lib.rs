pub mod deserializer;
pub mod enchantment;
pub mod error;
pub mod item_flag;
pub mod item_stack;
pub mod material;

pub use deserializer::*;
pub use enchantment::Enchantment;
pub use error::ItemStackError;
pub use item_flag::ItemFlag;
pub use item_stack::{ItemMeta, ItemStack};
pub use material::Material;

const NAMESPACE: &str = "minecraft:";

/// Brings a user supplied registry name into the `UPPER_SNAKE` form of the registries.
///
/// Accepts `diamond_sword`, `Diamond Sword`, `diamond-sword` and `minecraft:diamond_sword`.
pub(crate) fn normalize_name(name: &str) -> String {
    let name = name.trim();
    let name = match name.get(..NAMESPACE.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(NAMESPACE) => &name[NAMESPACE.len()..],
        _ => name,
    };

    name.chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::normalize_name;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("diamond_sword"), "DIAMOND_SWORD");
        assert_eq!(normalize_name(" Diamond Sword "), "DIAMOND_SWORD");
        assert_eq!(normalize_name("minecraft:diamond-sword"), "DIAMOND_SWORD");
        assert_eq!(normalize_name("MINECRAFT:stone"), "STONE");
        assert_eq!(normalize_name("wool:14"), "WOOL:14");
    }
}
