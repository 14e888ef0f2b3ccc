//! Statistical-plotting layer.
//!
//! Compiled in with the `stats` feature.  It keeps its own default
//! palette, used to color categories of statistical charts, which
//! [`crate::use_palette`] keeps in step with the global color cycle.
//! Whether the layer is present is decided at build time, see
//! [`is_available`].

use lazy_static::lazy_static;
use parking_lot::RwLock;
use rgb::RGB8;
use tracing::debug;
use crate::BRAND;

const AVAILABLE: bool = cfg!(feature = "stats");

lazy_static! {
    static ref PALETTE: RwLock<Vec<RGB8>> = RwLock::new(BRAND.colors());
}

/// Whether the statistical layer is part of this build.
#[inline]
pub const fn is_available() -> bool { AVAILABLE }

/// The default palette of the statistical layer.
pub fn palette() -> Vec<RGB8> {
    PALETTE.read().clone()
}

/// Set the default palette of the statistical layer.  Ignored when
/// the layer is unavailable.
pub fn set_palette(colors: Vec<RGB8>) {
    if !is_available() || colors.is_empty() { return }
    debug!(len = colors.len(), "statistical palette set");
    *PALETTE.write() = colors;
}
