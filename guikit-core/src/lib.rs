pub mod placeholder;
pub mod text;

pub use placeholder::{PlaceholderResolver, Placeholders};
