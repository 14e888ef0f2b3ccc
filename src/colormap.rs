//! Colormaps built from the palettes.

use std::fmt;
use rgb::RGBA;
use crate::{palettes::Palette, ColorRange, PaletteType, RGBColor, Result};

/// Identifier of the brand colormap.
pub const EBL12: &str = "ebl12";
/// Identifier of the colorblind-safe colormap.
pub const EBL12_SAFE: &str = "ebl12_safe";

/// Number of levels of interpolated colormaps.
pub const DEFAULT_LEVELS: usize = 256;

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    /// Colors used as given, without interpolation.
    Listed,
    /// `lut` sampled from evenly spaced breakpoints.
    LinearSegmented { breakpoints: Vec<RGBA<f64>> },
}

/// A named lookup table of colors.
///
/// A value `t` ∈ \[0, 1\] selects the level `⌊t·N⌋` (the last level
/// for `t == 1.`) where `N` is [`Colormap::len`].  Values outside
/// \[0, 1\] are clamped and NaN maps to the first level.
#[derive(Clone, PartialEq)]
pub struct Colormap {
    name: String,
    kind: Kind,
    lut: Vec<RGBA<f64>>, // Invariant: non-empty
}

impl Colormap {
    /// A discrete colormap using `colors` as they are.
    ///
    /// # Panics
    /// If `colors` is empty.
    pub fn listed<C: RGBColor>(name: impl Into<String>, colors: &[C]) -> Self {
        assert!(!colors.is_empty(), "Colormap::listed: no colors");
        Colormap { name: name.into(), kind: Kind::Listed,
                   lut: colors.iter().map(|c| c.to_rgba()).collect() }
    }

    /// A colormap interpolating linearly (in RGB space) between
    /// `breakpoints` evenly spread over \[0, 1\], quantized to `n`
    /// levels.
    ///
    /// # Panics
    /// If `breakpoints` is empty or `n == 0`.
    pub fn linear_segmented<C: RGBColor>(
        name: impl Into<String>, breakpoints: &[C], n: usize) -> Self {
        assert!(!breakpoints.is_empty(),
                "Colormap::linear_segmented: no breakpoints");
        assert!(n > 0, "Colormap::linear_segmented: no levels");
        let breakpoints: Vec<RGBA<f64>> =
            breakpoints.iter().map(|c| c.to_rgba()).collect();
        let lut = if n == 1 {
            vec![breakpoints[0]]
        } else {
            let last = (n - 1) as f64;
            (0 .. n).map(|k| interpolate(&breakpoints, k as f64 / last))
                .collect()
        };
        Colormap { name: name.into(),
                   kind: Kind::LinearSegmented { breakpoints }, lut }
    }

    /// A colormap named `name` for `palette`.  Diverging palettes are
    /// interpolated over [`DEFAULT_LEVELS`] levels; the other ones
    /// are used as they are.
    pub fn from_palette(palette: Palette, name: impl Into<String>) -> Self {
        let colors: Vec<RGBA<f64>> = palette.colors();
        match palette.typ() {
            PaletteType::Div =>
                Self::linear_segmented(name, &colors, DEFAULT_LEVELS),
            PaletteType::Qual | PaletteType::Seq => Self::listed(name, &colors),
        }
    }

    /// The identifier of the colormap.
    pub fn name(&self) -> &str { &self.name }

    /// Return the same colormap under another name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of levels.
    pub fn len(&self) -> usize { self.lut.len() }

    /// Colormaps always have at least one level.
    pub fn is_empty(&self) -> bool { self.lut.is_empty() }

    /// Whether the colormap is used without interpolation.
    pub fn is_listed(&self) -> bool { matches!(self.kind, Kind::Listed) }

    /// The colors of all levels, in order.
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.lut.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// The colors of all levels as `#RRGGBB`.
    pub fn hex(&self) -> Vec<String> {
        self.lut.iter().map(|c| c.to_hex()).collect()
    }

    /// The interpolation breakpoints, if any.
    pub fn breakpoints<Color: RGBColor>(&self) -> Option<Vec<Color>> {
        match &self.kind {
            Kind::Listed => None,
            Kind::LinearSegmented { breakpoints } => Some(
                breakpoints.iter().map(|&c| Color::from_rgba(c)).collect()),
        }
    }

    /// The colormap with levels in the opposite order, named with a
    /// `_r` suffix.
    pub fn reversed(&self) -> Self {
        let kind = match &self.kind {
            Kind::Listed => Kind::Listed,
            Kind::LinearSegmented { breakpoints } => Kind::LinearSegmented {
                breakpoints: breakpoints.iter().rev().copied().collect() },
        };
        Colormap { name: format!("{}_r", self.name), kind,
                   lut: self.lut.iter().rev().copied().collect() }
    }

    fn index(&self, t: f64) -> usize {
        let n = self.lut.len();
        if t.is_nan() { return 0 }
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        i.min(n - 1)
    }
}

/// Value of the piecewise linear interpolation at `x` ∈ \[0, 1\].
fn interpolate(breakpoints: &[RGBA<f64>], x: f64) -> RGBA<f64> {
    let segments = breakpoints.len() - 1;
    if segments == 0 { return breakpoints[0] }
    let xs = x.clamp(0., 1.) * segments as f64;
    let i = (xs.trunc() as usize).min(segments - 1);
    breakpoints[i].lerp(&breakpoints[i + 1], xs - i as f64)
}

impl<Color: RGBColor> ColorRange<Color> for Colormap {
    fn rgb(&self, t: f64) -> Color {
        Color::from_rgba(self.lut[self.index(t)])
    }
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colormap")
            .field("name", &self.name)
            .field("listed", &self.is_listed())
            .field("levels", &self.lut.len())
            .finish()
    }
}

/// Linear map of data in \[`vmin`, `vmax`\] onto \[0, 1\], clipping
/// values outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self { Normalize { vmin, vmax } }

    /// Bounds covering all finite values of `data` (\[0, 1\] if there
    /// are none).
    pub fn autoscale<'a>(data: impl IntoIterator<Item = &'a f64>) -> Self {
        let (lo, hi) = data.into_iter().filter(|x| x.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY),
                  |(lo, hi), &x| (lo.min(x), hi.max(x)));
        if lo.is_finite() { Normalize { vmin: lo, vmax: hi } }
        else { Normalize { vmin: 0., vmax: 1. } }
    }

    pub fn apply(&self, x: f64) -> f64 {
        let w = self.vmax - self.vmin;
        if w == 0. { return 0. }
        ((x - self.vmin) / w).clamp(0., 1.)
    }
}

/// Build a colormap named `registered_name` from the palette named
/// `palette_name` (see [`crate::palette`]).
pub fn get_colormap(palette_name: &str, registered_name: &str)
                    -> Result<Colormap> {
    let palette = crate::palette(palette_name)?;
    Ok(Colormap::from_palette(palette, registered_name))
}

/// The brand palette as the discrete colormap `"ebl12"`.
pub fn ebl_cmap() -> Colormap {
    Colormap::from_palette(crate::BRAND, EBL12)
}

/// The colorblind-safe palette as the discrete colormap `"ebl12_safe"`.
pub fn ebl_safe_cmap() -> Colormap {
    Colormap::from_palette(crate::SAFE, EBL12_SAFE)
}

/// Sequential mint colormap (5 levels).
pub fn seq_mint_cmap() -> Colormap {
    Colormap::from_palette(crate::SEQ_MINT, "seq_mint")
}

/// Sequential apricot colormap (5 levels).
pub fn seq_apricot_cmap() -> Colormap {
    Colormap::from_palette(crate::SEQ_APRICOT, "seq_apricot")
}

/// Diverging cranberry ↔ mint colormap (256 levels).
pub fn div_cran_mint_cmap() -> Colormap {
    Colormap::from_palette(crate::DIV_CRAN_MINT, "div_cran_mint")
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::Error;

    #[test]
    fn brand_colormap_is_the_palette() {
        let cmap = get_colormap("brand", "ebl12").unwrap();
        assert_eq!(cmap.name(), "ebl12");
        assert!(cmap.is_listed());
        let hex: Vec<String> = cmap.hex();
        let expected: Vec<&str> = crate::BRAND.hex().collect();
        assert_eq!(hex, expected);
    }

    #[test]
    fn unknown_palette() {
        assert!(matches!(get_colormap("ebl13", "x"),
                         Err(Error::UnknownPalette(_))));
    }

    #[test]
    fn listed_lookup() {
        let cmap = ebl_safe_cmap();
        let c = |t: f64| -> String { ColorRange::<RGB8>::rgb(&cmap, t).to_hex() };
        assert_eq!(c(0.), "#B63E6A");
        assert_eq!(c(1.5 / 12.), "#E982B0");
        assert_eq!(c(0.999), "#350009");
        assert_eq!(c(1.), "#350009");
        assert_eq!(c(7.), "#350009");
        assert_eq!(c(-1.), "#B63E6A");
        assert_eq!(c(f64::NAN), "#B63E6A");
    }

    #[test]
    fn diverging_levels() {
        let cmap = div_cran_mint_cmap();
        assert_eq!(cmap.len(), DEFAULT_LEVELS);
        assert!(!cmap.is_listed());
        let lut = cmap.hex();
        assert_eq!(lut[0], "#810D4B");
        assert_eq!(lut[255], "#187373");
        let bp: Vec<RGB8> = cmap.breakpoints().unwrap();
        assert_eq!(bp.len(), 5);
        assert_eq!(bp[2].to_hex(), "#FFF8E6");
    }

    #[test]
    fn interpolation_hits_breakpoints() {
        let bp = [RGB8::new(0, 0, 0), RGB8::new(200, 100, 0),
                  RGB8::new(255, 255, 255)];
        let cmap = Colormap::linear_segmented("test", &bp, 5);
        let lut: Vec<RGB8> = cmap.colors();
        assert_eq!(lut[0], bp[0]);
        assert_eq!(lut[1], RGB8::new(100, 50, 0));
        assert_eq!(lut[2], bp[1]);
        assert_eq!(lut[4], bp[2]);
    }

    #[test]
    fn reversed() {
        let r = seq_mint_cmap().reversed();
        assert_eq!(r.name(), "seq_mint_r");
        assert_eq!(r.hex()[0], "#2D6F6F");
        assert_eq!(r.hex()[4], "#E7F7F7");
    }

    #[test]
    fn normalize_clips() {
        let n = Normalize::new(-3., 3.);
        assert_eq!(n.apply(0.), 0.5);
        assert_eq!(n.apply(-10.), 0.);
        assert_eq!(n.apply(3.5), 1.);
        let auto = Normalize::autoscale(&[2., f64::NAN, -1., 4.]);
        assert_eq!(auto, Normalize::new(-1., 4.));
        assert_eq!(Normalize::new(1., 1.).apply(5.), 0.);
    }
}
