/// The colors a dot can take. The palette is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotColor {
    White,
    Red,
    Blue,
    Green,
    Pink,
}

impl DotColor {
    /// Palette order. The first entry is selected at startup.
    pub const PALETTE: [DotColor; 5] = [
        DotColor::White,
        DotColor::Red,
        DotColor::Blue,
        DotColor::Green,
        DotColor::Pink,
    ];

    /// Unmultiplied `[r, g, b, a]`.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            DotColor::White => [0xff, 0xff, 0xff, 0xff],
            DotColor::Red => [0xf4, 0x43, 0x36, 0xff],
            DotColor::Blue => [0x21, 0x96, 0xf3, 0xff],
            DotColor::Green => [0x4c, 0xaf, 0x50, 0xff],
            DotColor::Pink => [0xe9, 0x1e, 0x63, 0xff],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DotColor::White => "white",
            DotColor::Red => "red",
            DotColor::Blue => "blue",
            DotColor::Green => "green",
            DotColor::Pink => "pink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_starts_with_white() {
        assert_eq!(DotColor::PALETTE[0], DotColor::White);
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in DotColor::PALETTE.iter().enumerate() {
            for (j, b) in DotColor::PALETTE.iter().enumerate() {
                if i != j {
                    assert_ne!(a.rgba(), b.rgba(), "duplicate colors at {i} and {j}");
                }
            }
        }
    }
}
