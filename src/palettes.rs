//! The Economic Brain Lab palettes.
//!
//! Two 12-color categorical palettes share the same category order:
//! index `i` of [`BRAND`] and index `i` of [`SAFE`] stand for the same
//! category, the latter being tuned for color-vision deficiencies.
//! Three 5-color ramps complete the set for continuous data.

use std::fmt;
use std::str::FromStr;
use crate::{Error, RGBColor};

pub(crate) mod ty;
use ty::*;
pub use ty::{PaletteType, Trivalent};

macro_rules! swatches {
    ($($hex: literal),* $(,)?) => {
        &[$( Swatch { hex: $hex, rgb: rgb8($hex) } ),*]
    }
}

pub(crate) static BRAND_DATA: PaletteData = PaletteData {
    name: "brand",
    swatches: swatches![
        "#B4417E", "#E774B1", "#810D4B",
        "#F3A45E", "#FFD791", "#C0712B",
        "#4BA6A6", "#7ED9D9", "#187373",
        "#6A2E4F", "#9D6182", "#37001C",
    ],
    labels: Some(&[
        "Cranberry Plum", "Light Cranberry", "Dark Cranberry",
        "Soft Apricot", "Light Apricot", "Dark Apricot",
        "Cool Mint", "Light Mint", "Dark Mint",
        "Plum Shadow", "Light Plum", "Dark Plum",
    ]),
    typ: PaletteType::Qual,
    blind: Trivalent::No,
};

pub(crate) static SAFE_DATA: PaletteData = PaletteData {
    name: "safe",
    swatches: swatches![
        "#B63E6A", "#E982B0", "#800629",
        "#F7956A", "#FEC891", "#C34E22",
        "#4880A8", "#83BDDA", "#124271",
        "#6D2D43", "#9D6179", "#350009",
    ],
    labels: None,
    typ: PaletteType::Qual,
    blind: Trivalent::Yes,
};

pub(crate) static SEQ_MINT_DATA: PaletteData = PaletteData {
    name: "seq_mint",
    swatches: swatches!["#E7F7F7", "#BDEAEA", "#7ED9D9", "#4BA6A6", "#2D6F6F"],
    labels: None,
    typ: PaletteType::Seq,
    blind: Trivalent::Maybe,
};

pub(crate) static SEQ_APRICOT_DATA: PaletteData = PaletteData {
    name: "seq_apricot",
    swatches: swatches!["#FFF2E2", "#FFE2C3", "#FFD091", "#F3A45E", "#C0712B"],
    labels: None,
    typ: PaletteType::Seq,
    blind: Trivalent::Maybe,
};

pub(crate) static DIV_CRAN_MINT_DATA: PaletteData = PaletteData {
    name: "div_cran_mint",
    swatches: swatches!["#810D4B", "#B4417E", "#FFF8E6", "#4BA6A6", "#187373"],
    labels: None,
    typ: PaletteType::Div,
    blind: Trivalent::Maybe,
};

/// Brand-aligned categorical palette (12 colors).
pub static BRAND: Palette = Palette { palette: &BRAND_DATA };
/// Colorblind-safe categorical palette (12 colors).
pub static SAFE: Palette = Palette { palette: &SAFE_DATA };
/// Light to dark mint sequential ramp (5 colors).
pub static SEQ_MINT: Palette = Palette { palette: &SEQ_MINT_DATA };
/// Light to dark apricot sequential ramp (5 colors).
pub static SEQ_APRICOT: Palette = Palette { palette: &SEQ_APRICOT_DATA };
/// Cranberry to mint diverging ramp (5 breakpoints).
pub static DIV_CRAN_MINT: Palette = Palette { palette: &DIV_CRAN_MINT_DATA };

/// Names under which the palettes can be looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Brand,
    Safe,
    SeqMint,
    SeqApricot,
    DivCranMint,
}

impl PaletteName {
    pub const ALL: [PaletteName; 5] = [
        PaletteName::Brand, PaletteName::Safe, PaletteName::SeqMint,
        PaletteName::SeqApricot, PaletteName::DivCranMint];

    pub fn as_str(self) -> &'static str { self.palette().name() }

    pub fn palette(self) -> Palette {
        match self {
            PaletteName::Brand => BRAND,
            PaletteName::Safe => SAFE,
            PaletteName::SeqMint => SEQ_MINT,
            PaletteName::SeqApricot => SEQ_APRICOT,
            PaletteName::DivCranMint => DIV_CRAN_MINT,
        }
    }
}

impl FromStr for PaletteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteName::ALL.into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPalette(s.to_string()))
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the palette registered under `name` (`"brand"`, `"safe"`,
/// `"seq_mint"`, `"seq_apricot"` or `"div_cran_mint"`).
pub fn palette(name: &str) -> crate::Result<Palette> {
    Ok(name.parse::<PaletteName>()?.palette())
}

/// The brand palette when `safe` is false, the colorblind-safe one
/// otherwise.
#[inline]
pub fn categorical(safe: bool) -> Palette {
    if safe { SAFE } else { BRAND }
}

/// An immutable, ordered list of colors.
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl Palette {
    /// Iterate over all the palettes of this crate.
    pub fn all() -> impl Iterator<Item = Palette> {
        PaletteName::ALL.into_iter().map(PaletteName::palette)
    }

    /// The lookup name of the palette.
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.palette.swatches.len() }

    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Says whether the palette is colorblind safe.
    pub fn blind(&self) -> Trivalent { self.palette.blind }

    /// The literal `#RRGGBB` codes, in order.
    pub fn hex(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.palette.swatches.iter().map(|s| s.hex)
    }

    /// Returns the colors of the palette.
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.palette.swatches.iter()
            .map(|s| Color::from_rgba(s.rgb.to_rgba()))
            .collect()
    }

    /// The `i`-th color, wrapping around past the end.
    pub fn color<Color: RGBColor>(&self, i: usize) -> Color {
        let s = &self.palette.swatches[i % self.len()];
        Color::from_rgba(s.rgb.to_rgba())
    }

    /// Human readable names of the colors.  Palettes without named
    /// colors use their hex codes.
    pub fn labels(&self) -> Vec<&'static str> {
        match self.palette.labels {
            Some(l) => l.to_vec(),
            None => self.hex().collect(),
        }
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("name", &self.palette.name)
            .field("typ", &self.palette.typ)
            .field("colors", &self.hex().collect::<Vec<_>>())
            .finish()
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.palette, other.palette)
    }
}

impl Eq for Palette {}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn brand_literals() {
        let hex: Vec<_> = BRAND.hex().collect();
        assert_eq!(hex, ["#B4417E", "#E774B1", "#810D4B", "#F3A45E",
                         "#FFD791", "#C0712B", "#4BA6A6", "#7ED9D9",
                         "#187373", "#6A2E4F", "#9D6182", "#37001C"]);
    }

    #[test]
    fn decoded_matches_literal() {
        for p in Palette::all() {
            let colors: Vec<RGB8> = p.colors();
            for (c, h) in colors.iter().zip(p.hex()) {
                assert_eq!(&c.to_hex(), h, "palette {}", p.name());
            }
        }
        assert_eq!(BRAND.color::<RGB8>(0), RGB8::new(0xB4, 0x41, 0x7E));
    }

    #[test]
    fn lookup() {
        assert_eq!(palette("safe").unwrap(), SAFE);
        assert_eq!("div_cran_mint".parse::<PaletteName>().unwrap(),
                   PaletteName::DivCranMint);
        assert!(matches!(palette("viridis"), Err(Error::UnknownPalette(n))
                         if n == "viridis"));
    }

    #[test]
    fn labels() {
        assert_eq!(BRAND.labels()[6], "Cool Mint");
        assert_eq!(SAFE.labels()[6], "#4880A8");
        assert_eq!(BRAND.color::<RGB8>(12), BRAND.color::<RGB8>(0));
    }
}
