//! The fixed header palette.
//!
//! These are the six CSS color names the page cycles through, carried with
//! their RGB values so a terminal can paint them. The default header color,
//! lemonchiffon, is deliberately not part of the palette: it is only ever
//! visible before the first day is applied.

/// A named color with the RGB triple a terminal backend can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

/// Header color before any day has been applied.
pub const DEFAULT_HEADER: HeaderColor = HeaderColor {
    name: "lemonchiffon",
    rgb: (0xFF, 0xFA, 0xCD),
};

/// The rotation palette, indexed by day index.
pub const PALETTE: [HeaderColor; 6] = [
    HeaderColor {
        name: "papayawhip",
        rgb: (0xFF, 0xEF, 0xD5),
    },
    HeaderColor {
        name: "blanchedalmond",
        rgb: (0xFF, 0xEB, 0xCD),
    },
    HeaderColor {
        name: "peachpuff",
        rgb: (0xFF, 0xDA, 0xB9),
    },
    HeaderColor {
        name: "bisque",
        rgb: (0xFF, 0xE4, 0xC4),
    },
    HeaderColor {
        name: "cornsilk",
        rgb: (0xFF, 0xF8, 0xDC),
    },
    HeaderColor {
        name: "lightyellow",
        rgb: (0xFF, 0xFF, 0xE0),
    },
];
