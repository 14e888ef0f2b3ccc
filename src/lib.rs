//! Economic Brain Lab palettes and plotting defaults.
//!
//! - [`BRAND`] and [`SAFE`]: 12-color categorical [`Palette`]s.
//! - [`SEQ_MINT`], [`SEQ_APRICOT`] and [`DIV_CRAN_MINT`]: ramps for
//!   continuous data.
//!
//! [`Colormap`]s are built from palettes with [`get_colormap`] and
//! registered under the names `"ebl12"` and `"ebl12_safe"` by
//! [`register_colormaps`].  [`use_palette`] and [`cycle_colors`] set
//! the default color cycle, globally or on one [`Axes`].  Demo
//! figures are rendered with `plotters` by [`demo`] and [`plot_all`].
//!
//! ```
//! use rgb::RGB8;
//! use ebl_palette::{get_colormap, ColorRange};
//! let cmap = get_colormap("brand", "ebl12").unwrap();
//! let first: RGB8 = cmap.rgb(0.);
//! assert_eq!(first, RGB8::new(0xB4, 0x41, 0x7E));
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8};

mod error;
mod palettes;
mod colormap;
pub mod rc;
pub mod stats;
mod style;
mod figure;
mod demo;

pub use error::{Error, Result};
pub use palettes::{palette, categorical, Palette, PaletteName, PaletteType,
                   Trivalent, BRAND, SAFE, SEQ_MINT, SEQ_APRICOT,
                   DIV_CRAN_MINT};
pub use colormap::{get_colormap, ebl_cmap, ebl_safe_cmap, seq_mint_cmap,
                   seq_apricot_cmap, div_cran_mint_cmap, Colormap, Normalize,
                   DEFAULT_LEVELS, EBL12, EBL12_SAFE};
pub use rc::{register_colormaps, register_colormaps_in, use_palette,
             cycle_colors, Axes, ColormapRegistry};
pub use style::{use_style, StyleSheet};
pub use figure::{Figure, Marker};
pub use demo::{demo, plot_all, write_all, FIGURES_DIR, VARIANTS};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color, R: ColorRange<Color>> ColorRange<Color> for &R {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i > self.j { 0 } else { self.j - self.i + 1 }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Parse a `#RRGGBB` color code (hex digits of either case).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use ebl_palette::RGBColor;
    /// let c = RGB8::from_hex("#4BA6A6").unwrap();
    /// assert_eq!(c, RGB8::new(0x4B, 0xA6, 0xA6));
    /// ```
    fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i .. i + 2], 16).map_err(|_| invalid())
        };
        Ok(Self::from_rgba(RGBA { r: channel(0)? as f64,
                                  g: channel(2)? as f64,
                                  b: channel(4)? as f64,
                                  a: 255. }))
    }

    /// Format the color as `#RRGGBB` with uppercase digits (alpha is
    /// dropped).
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        let c = |x: f64| x.round().clamp(0., 255.) as u8;
        format!("#{:02X}{:02X}{:02X}", c(r), c(g), c(b))
    }

    /// Linear interpolation between `self` (`t == 0.`) and `c1`
    /// (`t == 1.`) in RGB space.
    fn lerp(&self, c1: &Self, t: f64) -> Self {
        let c0 = self.to_rgba();
        let c1 = c1.to_rgba();
        let mix = |x0: f64, x1: f64| x0 + t * (x1 - x0);
        Self::from_rgba(RGBA { r: mix(c0.r, c1.r), g: mix(c0.g, c1.g),
                               b: mix(c0.b, c1.b), a: mix(c0.a, c1.a) })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

#[inline]
fn u8_of(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: u8_of(c.r),  g: u8_of(c.g),  b: u8_of(c.b) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_is_uppercase() {
        let c = RGB8::from_hex("#b4417e").unwrap();
        assert_eq!(c.to_hex(), "#B4417E");
    }

    #[test]
    fn invalid_hex() {
        for s in ["B4417E", "#B4417", "#B4417EE", "#GG417E", ""] {
            assert!(matches!(RGB8::from_hex(s), Err(Error::InvalidColor(_))),
                    "{s:?} accepted");
        }
    }

    #[test]
    fn colormap_range() {
        let cmap = div_cran_mint_cmap();
        let v: Vec<(f64, RGB8)> =
            ColorRange::<RGB8>::range(cmap, -3., 3., 7).collect();
        assert_eq!(v.len(), 7);
        for (i, (x, _)) in v.iter().enumerate() {
            assert!((x - (-3. + i as f64)).abs() <= 1e-12,
                    "{} ≉ {}", x, -3. + i as f64);
        }
        assert_eq!(v[0].1.to_hex(), "#810D4B");
        assert_eq!(v[6].1.to_hex(), "#187373");
        assert_eq!(RGB8::new(0, 0, 0).lerp(&RGB8::new(255, 255, 255), 0.5),
                   RGB8::new(128, 128, 128));
    }

    #[test]
    fn empty_range() {
        let mut r = ColorRange::<RGB8>::range(seq_mint_cmap(), 0., 1., 0);
        assert_eq!(ExactSizeIterator::len(&r), 0);
        assert!(Iterator::next(&mut r).is_none());
    }
}
