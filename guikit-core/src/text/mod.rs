//! Legacy (`§`-prefixed) formatting codes, as used by item names and lore.
//!
//! Config authors write `&` instead of `§`; [`translate_color_codes`] rewrites
//! those into the form the client understands.

use color::{Color, NamedColor, RGBColor};
use colored::Colorize;

pub mod color;

/// Prefix of every legacy formatting code.
pub const SECTION_SIGN: char = '§';

/// The alternate prefix accepted in configuration files.
pub const DEFAULT_ALT_CHAR: char = '&';

const FORMAT_CODES: &str = "0123456789abcdefklmnorx";

/// Replaces `alt` followed by a valid code with `§` and the lower-cased code.
///
/// `alt` followed by `#RRGGBB` becomes `§x§R§R§G§G§B§B`.
/// An `alt` that is not followed by a valid code is kept as is.
pub fn translate_color_codes(alt: char, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == alt {
            if let Some(hex) = hex_at(&chars, i + 1) {
                out.push(SECTION_SIGN);
                out.push('x');
                for digit in hex {
                    out.push(SECTION_SIGN);
                    out.push(digit.to_ascii_lowercase());
                }
                i += 8;
                continue;
            }
            if let Some(next) = chars.get(i + 1).map(char::to_ascii_lowercase) {
                if FORMAT_CODES.contains(next) {
                    out.push(SECTION_SIGN);
                    out.push(next);
                    i += 2;
                    continue;
                }
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

/// [`translate_color_codes`] with `&`.
pub fn parse_color(text: &str) -> String {
    translate_color_codes(DEFAULT_ALT_CHAR, text)
}

pub fn parse_color_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| parse_color(line)).collect()
}

fn hex_at(chars: &[char], start: usize) -> Option<&[char]> {
    if chars.get(start) != Some(&'#') {
        return None;
    }
    let digits = chars.get(start + 1..start + 7)?;
    digits
        .iter()
        .all(char::is_ascii_hexdigit)
        .then_some(digits)
}

/// Removes every `§` code, leaving the plain text.
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_SIGN {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Default, Clone, Copy)]
struct LegacyStyle {
    color: Color,
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
}

impl LegacyStyle {
    fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut painted = self.color.console_color(text);
        if self.bold {
            painted = painted.bold();
        }
        if self.italic {
            painted = painted.italic();
        }
        if self.underlined {
            painted = painted.underline();
        }
        if self.strikethrough {
            painted = painted.strikethrough();
        }
        painted.to_string()
    }
}

/// Renders `§`-formatted text with ANSI escapes, for log output.
pub fn to_pretty_console(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut segment = String::new();
    let mut style = LegacyStyle::default();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != SECTION_SIGN {
            segment.push(chars[i]);
            i += 1;
            continue;
        }
        let Some(code) = chars.get(i + 1).map(char::to_ascii_lowercase) else {
            break;
        };
        out += &style.render(&segment);
        segment.clear();
        i += 2;

        match code {
            'x' => {
                if let Some(color) = legacy_hex_at(&chars, i) {
                    style = LegacyStyle {
                        color: Color::Rgb(color),
                        ..Default::default()
                    };
                    i += 12;
                }
            }
            'k' => {}
            'l' => style.bold = true,
            'm' => style.strikethrough = true,
            'n' => style.underlined = true,
            'o' => style.italic = true,
            'r' => style = LegacyStyle::default(),
            other => {
                // a color code also clears every active format
                if let Some(color) = NamedColor::from_code(other) {
                    style = LegacyStyle {
                        color: Color::Named(color),
                        ..Default::default()
                    };
                }
            }
        }
    }
    out += &style.render(&segment);
    out
}

/// Reads the `§R§R§G§G§B§B` tail of a `§x` hex color.
fn legacy_hex_at(chars: &[char], start: usize) -> Option<RGBColor> {
    let pairs = chars.get(start..start + 12)?;
    let mut hex = String::with_capacity(6);
    for pair in pairs.chunks(2) {
        if pair[0] != SECTION_SIGN {
            return None;
        }
        hex.push(pair[1]);
    }
    RGBColor::from_hex(&hex)
}
