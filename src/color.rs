//! Display colors attached to bodies.
//!
//! The physics never reads a body's color; it only travels with the body
//! so a host can draw it.

use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const PINK: Color = Color::rgb(0xe7, 0x9f, 0xae);
    pub const RED: Color = Color::rgb(0xda, 0x4b, 0x34);
    pub const YELLOW: Color = Color::rgb(0xf5, 0xc3, 0x47);
    pub const TURQUOISE: Color = Color::rgb(0x8b, 0xcb, 0xf3);
    pub const WHITE: Color = Color::rgb(0xfb, 0xfb, 0xf8);

    /// Default spawn palette.
    pub const PALETTE: [Color; 5] = [
        Color::PINK,
        Color::RED,
        Color::YELLOW,
        Color::TURQUOISE,
        Color::WHITE,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA with full opacity.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
