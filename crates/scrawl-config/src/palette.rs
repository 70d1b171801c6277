/// The fixed set of text colors offered by the toolbar.
use crate::color::HexColor;

/// One selectable toolbar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Display name, also used as the accessibility label of the button.
    pub name: &'static str,
    pub color: HexColor,
}

pub const BLACK: Swatch = Swatch {
    name: "Black",
    color: HexColor::rgb(0, 0, 0),
};
pub const RED: Swatch = Swatch {
    name: "Red",
    color: HexColor::rgb(255, 0, 0),
};
pub const BLUE: Swatch = Swatch {
    name: "Blue",
    color: HexColor::rgb(0, 0, 255),
};
pub const GREEN: Swatch = Swatch {
    name: "Green",
    color: HexColor::rgb(0, 128, 0),
};
pub const PURPLE: Swatch = Swatch {
    name: "Purple",
    color: HexColor::rgb(128, 0, 128),
};
pub const ORANGE: Swatch = Swatch {
    name: "Orange",
    color: HexColor::rgb(255, 165, 0),
};

/// The toolbar palette in display order.
pub fn toolbar_palette() -> [Swatch; 6] {
    [BLACK, RED, BLUE, GREEN, PURPLE, ORANGE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_six_distinct_colors() {
        let palette = toolbar_palette();
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a.color, b.color, "{} and {} collide", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_palette_starts_with_black() {
        assert_eq!(toolbar_palette()[0], BLACK);
        assert_eq!(BLACK.color.hex_string(), "#000000");
    }
}
