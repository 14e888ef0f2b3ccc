//! Process-wide plotting defaults.
//!
//! The default color cycle, the active [`StyleSheet`] and the
//! colormap registry are shared by the whole process.  They are only
//! mutated by explicit calls ([`use_palette`], [`cycle_colors`],
//! [`register_colormaps`], [`set_style`], …); callers sequence those
//! calls themselves.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use rgb::RGB8;
use tracing::{debug, trace};
use crate::colormap::{ebl_cmap, ebl_safe_cmap, Colormap};
use crate::{categorical, stats, Error, Result, StyleSheet};

/// Color cycle in effect before any palette is selected.
const INITIAL_CYCLE: [RGB8; 10] = [
    RGB8 { r: 0x1F, g: 0x77, b: 0xB4 }, RGB8 { r: 0xFF, g: 0x7F, b: 0x0E },
    RGB8 { r: 0x2C, g: 0xA0, b: 0x2C }, RGB8 { r: 0xD6, g: 0x27, b: 0x28 },
    RGB8 { r: 0x94, g: 0x67, b: 0xBD }, RGB8 { r: 0x8C, g: 0x56, b: 0x4B },
    RGB8 { r: 0xE3, g: 0x77, b: 0xC2 }, RGB8 { r: 0x7F, g: 0x7F, b: 0x7F },
    RGB8 { r: 0xBC, g: 0xBD, b: 0x22 }, RGB8 { r: 0x17, g: 0xBE, b: 0xCF },
];

struct Defaults {
    cycle: Vec<RGB8>,
    style: StyleSheet,
}

impl Defaults {
    fn new() -> Self {
        Defaults { cycle: INITIAL_CYCLE.to_vec(), style: StyleSheet::bright() }
    }
}

lazy_static! {
    static ref DEFAULTS: RwLock<Defaults> = RwLock::new(Defaults::new());
    static ref COLORMAPS: RwLock<ColormapRegistry> =
        RwLock::new(ColormapRegistry::new());
}

/// The global default color cycle.
pub fn color_cycle() -> Vec<RGB8> {
    DEFAULTS.read().cycle.clone()
}

/// Replace the global default color cycle.
///
/// # Panics
/// If `colors` is empty.
pub fn set_color_cycle(colors: Vec<RGB8>) {
    assert!(!colors.is_empty(), "rc::set_color_cycle: empty cycle");
    debug!(len = colors.len(), "global color cycle set");
    DEFAULTS.write().cycle = colors;
}

/// The active style sheet.
pub fn style() -> StyleSheet {
    DEFAULTS.read().style.clone()
}

/// Make `sheet` the active style sheet.  Its color cycle, if any,
/// becomes the global default.
pub fn set_style(sheet: StyleSheet) -> Result<()> {
    let cycle = sheet.cycle()?;
    sheet.colors()?;
    debug!(name = %sheet.name, "style sheet activated");
    let mut d = DEFAULTS.write();
    if let Some(cycle) = cycle.filter(|c| !c.is_empty()) {
        d.cycle = cycle;
    }
    d.style = sheet;
    Ok(())
}

/// Restore the initial color cycle and style sheet, and empty the
/// colormap registry.
pub fn reset() {
    *DEFAULTS.write() = Defaults::new();
    *COLORMAPS.write() = ColormapRegistry::new();
    debug!("plotting defaults reset");
}

/// Look up a colormap in the global registry.
pub fn colormap(name: &str) -> Result<Colormap> {
    COLORMAPS.read().get(name).cloned()
}

/// Register `cmap` in the global registry (see
/// [`ColormapRegistry::register`]).
pub fn register_colormap(cmap: Colormap) -> Result<()> {
    COLORMAPS.write().register(cmap)
}

/// Names of the colormaps in the global registry.
pub fn colormap_names() -> Vec<String> {
    COLORMAPS.read().names().map(String::from).collect()
}

/// Colormaps by name.
///
/// Names are never overwritten by [`register`]: registering a name
/// twice fails with [`Error::ColormapExists`] and the first colormap
/// stays in place.
///
/// [`register`]: ColormapRegistry::register
#[derive(Clone, Debug, Default)]
pub struct ColormapRegistry {
    maps: BTreeMap<String, Colormap>,
}

impl ColormapRegistry {
    pub fn new() -> Self { Self::default() }

    /// Add `cmap` under its own name.
    pub fn register(&mut self, cmap: Colormap) -> Result<()> {
        if self.contains(cmap.name()) {
            return Err(Error::ColormapExists(cmap.name().to_string()))
        }
        debug!(name = cmap.name(), levels = cmap.len(), "colormap registered");
        self.maps.insert(cmap.name().to_string(), cmap);
        Ok(())
    }

    /// Add `cmap`, returning the colormap it displaces.
    pub fn register_or_replace(&mut self, cmap: Colormap) -> Option<Colormap> {
        debug!(name = cmap.name(), "colormap registered (replacing)");
        self.maps.insert(cmap.name().to_string(), cmap)
    }

    pub fn get(&self, name: &str) -> Result<&Colormap> {
        self.maps.get(name)
            .ok_or_else(|| Error::UnknownColormap(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool { self.maps.contains_key(name) }

    /// Registered names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }
}

/// Register `"ebl12"` and `"ebl12_safe"` in `registry`.
pub fn register_colormaps_in(registry: &mut ColormapRegistry) -> Result<()> {
    registry.register(ebl_cmap())?;
    registry.register(ebl_safe_cmap())?;
    Ok(())
}

/// Register `"ebl12"` and `"ebl12_safe"` in the global registry.
/// A second call fails with [`Error::ColormapExists`].
pub fn register_colormaps() -> Result<()> {
    register_colormaps_in(&mut COLORMAPS.write())
}

/// Make the brand palette (or the colorblind-safe one if `safe`) the
/// global default color cycle, and the default palette of the
/// statistical layer when it is available.
pub fn use_palette(safe: bool) {
    let palette = categorical(safe);
    set_color_cycle(palette.colors());
    if stats::is_available() {
        stats::set_palette(palette.colors());
    } else {
        trace!("statistical layer unavailable, skipped");
    }
}

/// Install the palette as color cycle of `target`, or globally when
/// `target` is `None`.  Returns the modified surface.
pub fn cycle_colors(target: Option<&mut Axes>, safe: bool)
                    -> Option<&mut Axes> {
    let colors = categorical(safe).colors();
    match target {
        None => {
            set_color_cycle(colors);
            None
        }
        Some(ax) => {
            ax.set_color_cycle(colors);
            Some(ax)
        }
    }
}

/// A drawing surface.  Series drawn on it take their colors from its
/// own cycle when one is set, from the global default otherwise.
#[derive(Clone, Debug, Default)]
pub struct Axes {
    cycle: Option<Vec<RGB8>>,
    next: usize,
}

impl Axes {
    pub fn new() -> Self { Self::default() }

    /// Set the local color cycle and restart it.
    ///
    /// # Panics
    /// If `colors` is empty.
    pub fn set_color_cycle(&mut self, colors: Vec<RGB8>) {
        assert!(!colors.is_empty(), "Axes::set_color_cycle: empty cycle");
        self.cycle = Some(colors);
        self.next = 0;
    }

    pub fn has_local_cycle(&self) -> bool { self.cycle.is_some() }

    /// The cycle in effect for this surface.
    pub fn color_cycle(&self) -> Vec<RGB8> {
        match &self.cycle {
            Some(c) => c.clone(),
            None => color_cycle(),
        }
    }

    /// The color of the next series.
    pub fn next_color(&mut self) -> RGB8 {
        let cycle = self.color_cycle();
        let c = cycle[self.next % cycle.len()];
        self.next += 1;
        c
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BRAND, EBL12_SAFE, SAFE};

    #[test]
    fn collision_keeps_first() {
        let mut reg = ColormapRegistry::new();
        register_colormaps_in(&mut reg).unwrap();
        assert_eq!(reg.names().collect::<Vec<_>>(), ["ebl12", "ebl12_safe"]);
        assert!(reg.contains(EBL12_SAFE) && !reg.contains("ebl12_r"));
        let other = crate::seq_mint_cmap().with_name("ebl12");
        assert!(matches!(reg.register(other.clone()),
                         Err(Error::ColormapExists(n)) if n == "ebl12"));
        assert!(matches!(register_colormaps_in(&mut reg),
                         Err(Error::ColormapExists(_))));
        assert_eq!(reg.get("ebl12").unwrap(), &ebl_cmap());
        assert!(reg.register_or_replace(other.clone()).is_some());
        assert_eq!(reg.get("ebl12").unwrap(), &other);
    }

    #[test]
    fn unknown_colormap() {
        let reg = ColormapRegistry::new();
        assert!(matches!(reg.get("ebl12"), Err(Error::UnknownColormap(_))));
    }

    #[test]
    fn local_cycle_wraps() {
        let mut ax = Axes::new();
        assert!(!ax.has_local_cycle());
        let ax = cycle_colors(Some(&mut ax), true).unwrap();
        assert_eq!(ax.color_cycle(), SAFE.colors::<RGB8>());
        let first = ax.next_color();
        for _ in 1 .. 12 { ax.next_color(); }
        assert_eq!(ax.next_color(), first);
        ax.set_color_cycle(BRAND.colors());
        assert_eq!(ax.next_color(), BRAND.color::<RGB8>(0));
    }
}
