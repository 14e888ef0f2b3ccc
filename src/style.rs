//! Style sheets: figure colors, resolution and default color cycle.

use std::path::Path;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::{rc, Result, RGBColor, BRAND};

/// Rendering defaults, read from TOML files such as
/// `styles/ebl.toml`.  Missing keys take the value of
/// [`StyleSheet::bright`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub name: String,
    /// Background of the whole figure.
    pub figure_facecolor: String,
    /// Background of the plotting area.
    pub axes_facecolor: String,
    /// Frame around the plotting area.
    pub axes_edgecolor: String,
    pub grid_color: String,
    /// Titles and labels.
    pub text_color: String,
    /// Outline of bars and markers.
    pub edge_color: String,
    /// Pixels per inch of exported figures.
    pub dpi: u32,
    /// Default color cycle installed when the sheet is activated.
    pub color_cycle: Option<Vec<String>>,
}

/// The colors of a [`StyleSheet`], decoded, and its text size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StyleColors {
    pub(crate) figure: RGB8,
    pub(crate) axes: RGB8,
    pub(crate) axes_edge: RGB8,
    pub(crate) grid: RGB8,
    pub(crate) text: RGB8,
    pub(crate) edge: RGB8,
    /// Height of panel titles, in pixels.
    pub(crate) text_px: f64,
}

impl Default for StyleSheet {
    fn default() -> Self { StyleSheet::bright() }
}

impl StyleSheet {
    /// Light background, dark outlines.
    pub fn bright() -> Self {
        StyleSheet {
            name: "ebl".to_string(),
            figure_facecolor: "#FFFFFF".to_string(),
            axes_facecolor: "#FFFFFF".to_string(),
            axes_edgecolor: "#2B2B2B".to_string(),
            grid_color: "#E6E1E4".to_string(),
            text_color: "#2B2B2B".to_string(),
            edge_color: "#2B2B2B".to_string(),
            dpi: 100,
            color_cycle: Some(BRAND.hex().map(String::from).collect()),
        }
    }

    /// Dark background, cream outlines.
    pub fn dark() -> Self {
        StyleSheet {
            name: "ebl_dark".to_string(),
            figure_facecolor: "#1E1A1D".to_string(),
            axes_facecolor: "#1E1A1D".to_string(),
            axes_edgecolor: "#FFF8E6".to_string(),
            grid_color: "#3B3338".to_string(),
            text_color: "#FFF8E6".to_string(),
            edge_color: "#FFF8E6".to_string(),
            ..StyleSheet::bright()
        }
    }

    /// Parse a style sheet from TOML and check its colors.
    pub fn from_toml(s: &str) -> Result<Self> {
        let sheet: StyleSheet = toml::from_str(s)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Read a style sheet from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheet = Self::from_toml(&std::fs::read_to_string(path)?)?;
        debug!(path = %path.display(), name = %sheet.name, "loaded style sheet");
        Ok(sheet)
    }

    fn validate(&self) -> Result<()> {
        self.colors()?;
        self.cycle()?;
        Ok(())
    }

    pub(crate) fn colors(&self) -> Result<StyleColors> {
        Ok(StyleColors {
            figure: RGB8::from_hex(&self.figure_facecolor)?,
            axes: RGB8::from_hex(&self.axes_facecolor)?,
            axes_edge: RGB8::from_hex(&self.axes_edgecolor)?,
            grid: RGB8::from_hex(&self.grid_color)?,
            text: RGB8::from_hex(&self.text_color)?,
            edge: RGB8::from_hex(&self.edge_color)?,
            text_px: self.dpi.max(1) as f64 * 13. / 100.,
        })
    }

    /// The decoded color cycle, if the sheet sets one.
    pub fn cycle(&self) -> Result<Option<Vec<RGB8>>> {
        self.color_cycle.as_ref()
            .map(|c| c.iter().map(|h| RGB8::from_hex(h)).collect::<Result<Vec<_>>>())
            .transpose()
    }

    /// Figure size in pixels for a size given in inches.
    pub fn pixels(&self, (w, h): (f64, f64)) -> (u32, u32) {
        let dpi = self.dpi.max(1) as f64;
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }
}

/// Load the style sheet at `path` and make it the active one (see
/// [`rc::set_style`]).
pub fn use_style(path: impl AsRef<Path>) -> Result<()> {
    rc::set_style(StyleSheet::load(path)?)
}
