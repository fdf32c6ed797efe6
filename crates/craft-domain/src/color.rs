use serde::{Deserialize, Serialize};
use std::fmt;

/// Color RGBA de un item. Los valores hex compactos (p. ej. `0xAABBCC`)
/// se convierten con `from_rgb`; el canal alfa queda opaco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 0xFF, g: 0xFF, b: 0xFF, a: 0xFF };

    pub fn from_rgb(rgb: u32) -> Self {
        Self { r: ((rgb >> 16) & 0xFF) as u8,
               g: ((rgb >> 8) & 0xFF) as u8,
               b: (rgb & 0xFF) as u8,
               a: 0xFF }
    }

    pub fn to_rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_rgb())
    }
}
