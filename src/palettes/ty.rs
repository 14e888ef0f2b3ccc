use rgb::RGB8;

/// One entry of a palette: its literal `#RRGGBB` code and the decoded
/// value.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Swatch {
    pub(crate) hex: &'static str,
    pub(crate) rgb: RGB8,
}

/// A named list of colors with certain characteristics.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) swatches: &'static [Swatch], // Invariant: length ≥ 2
    pub(crate) labels: Option<&'static [&'static str]>,
    pub(crate) typ: PaletteType,
    pub(crate) blind: Trivalent,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high, light colors for low data values to dark
    /// colors for high data values.
    Seq,
    /// Divergent color scheme: two hues meeting at a light neutral
    /// midpoint, for signed data centered at zero.
    Div,
    /// Qualitative color scheme.  Hues do not imply magnitude
    /// differences; each index stands for one category.
    Qual
}

/// Trivalent logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trivalent {
    Yes,
    Maybe,
    No,
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0' ..= b'9' => b - b'0',
        b'A' ..= b'F' => b - b'A' + 10,
        b'a' ..= b'f' => b - b'a' + 10,
        _ => panic!("palette: not a hexadecimal digit"),
    }
}

/// Decode a `#RRGGBB` literal.  Only used in constant context so a
/// malformed literal is a compile error.
pub(crate) const fn rgb8(hex: &str) -> RGB8 {
    let b = hex.as_bytes();
    assert!(b.len() == 7 && b[0] == b'#', "palette: expected #RRGGBB");
    RGB8 {
        r: hex_digit(b[1]) * 16 + hex_digit(b[2]),
        g: hex_digit(b[3]) * 16 + hex_digit(b[4]),
        b: hex_digit(b[5]) * 16 + hex_digit(b[6]),
    }
}
