use colored::{ColoredString, Colorize};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Text color
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The default color for the text will be used, which varies by context
    /// (item names are white or aqua, lore is purple and italic).
    #[default]
    Reset,
    /// RGB Color
    Rgb(RGBColor),
    /// One of the 16 named Minecraft colors
    Named(NamedColor),
}

impl Color {
    pub fn console_color(&self, text: &str) -> ColoredString {
        match self {
            Color::Reset => text.clear(),
            Color::Named(color) => match color {
                NamedColor::Black => text.black(),
                NamedColor::DarkBlue => text.blue(),
                NamedColor::DarkGreen => text.green(),
                NamedColor::DarkAqua => text.cyan(),
                NamedColor::DarkRed => text.red(),
                NamedColor::DarkPurple => text.purple(),
                NamedColor::Gold => text.yellow(),
                NamedColor::Gray => text.bright_black(),
                NamedColor::DarkGray => text.bright_black(),
                NamedColor::Blue => text.bright_blue(),
                NamedColor::Green => text.bright_green(),
                NamedColor::Aqua => text.cyan(),
                NamedColor::Red => text.red(),
                NamedColor::LightPurple => text.bright_purple(),
                NamedColor::Yellow => text.bright_yellow(),
                NamedColor::White => text.white(),
            },
            // TODO: Check if terminal supports true color
            Color::Rgb(color) => text.truecolor(color.red, color.green, color.blue),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct RGBColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RGBColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    /// Parses six hex digits, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(RGBColor::new(r, g, b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Named Minecraft color
///
/// The discriminant is the hex digit of the legacy color code, `§0` to `§f`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, FromPrimitive)]
pub enum NamedColor {
    Black = 0,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// The character following `§` for this color.
    pub fn code(&self) -> char {
        // discriminants are always below 16
        char::from_digit(*self as u32, 16).unwrap_or('f')
    }

    pub fn from_code(code: char) -> Option<Self> {
        code.to_digit(16).and_then(NamedColor::from_u32)
    }
}

#[cfg(test)]
mod test {
    use super::{NamedColor, RGBColor};

    #[test]
    fn test_named_color_codes() {
        assert_eq!(NamedColor::Black.code(), '0');
        assert_eq!(NamedColor::Gold.code(), '6');
        assert_eq!(NamedColor::White.code(), 'f');
        assert_eq!(NamedColor::from_code('c'), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_code('C'), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_code('g'), None);
    }

    #[test]
    fn test_hex_color() {
        let color = RGBColor::from_hex("#ff8800").unwrap();
        assert_eq!(color, RGBColor::new(0xff, 0x88, 0x00));
        assert_eq!(color.to_hex(), "#FF8800");
        assert_eq!(RGBColor::from_hex("ff8800"), Some(color));
        assert_eq!(RGBColor::from_hex("#ff88"), None);
        assert_eq!(RGBColor::from_hex("#gg8800"), None);
    }
}
