//! Process-wide defaults.  Everything runs in one test so that no
//! other thread touches the shared state meanwhile.

use std::path::Path;
use rgb::RGB8;
use ebl_palette::*;

#[test]
fn global_defaults() {
    rc::reset();
    let initial = rc::color_cycle();
    assert_eq!(initial.len(), 10);
    assert_ne!(initial, BRAND.colors::<RGB8>());

    use_palette(false);
    assert_eq!(rc::color_cycle(), BRAND.colors::<RGB8>());
    use_palette(true);
    assert_eq!(rc::color_cycle(), SAFE.colors::<RGB8>());
    if stats::is_available() {
        assert_eq!(stats::palette(), SAFE.colors::<RGB8>());
    }

    // Global application.
    assert!(cycle_colors(None, false).is_none());
    assert_eq!(rc::color_cycle(), BRAND.colors::<RGB8>());

    // Local application leaves the global cycle alone.
    let mut follower = Axes::new();
    let mut ax = Axes::new();
    let before = rc::color_cycle();
    let out = cycle_colors(Some(&mut ax), true).unwrap();
    assert!(out.has_local_cycle());
    assert_eq!(out.color_cycle(), SAFE.colors::<RGB8>());
    assert_eq!(rc::color_cycle(), before);
    assert_eq!(follower.next_color(), BRAND.color::<RGB8>(0));

    // Registration: the first call succeeds, every later one fails.
    assert!(rc::colormap_names().is_empty());
    register_colormaps().unwrap();
    assert_eq!(rc::colormap_names(), ["ebl12", "ebl12_safe"]);
    assert_eq!(rc::colormap(EBL12).unwrap().hex(),
               BRAND.hex().collect::<Vec<_>>());
    for _ in 0 .. 2 {
        assert!(matches!(register_colormaps(),
                         Err(Error::ColormapExists(n)) if n == "ebl12"));
    }
    assert!(matches!(rc::register_colormap(ebl_safe_cmap()),
                     Err(Error::ColormapExists(n)) if n == "ebl12_safe"));
    rc::register_colormap(seq_mint_cmap()).unwrap();
    assert!(matches!(rc::colormap("viridis"), Err(Error::UnknownColormap(_))));

    // Style sheets install their color cycle.
    rc::set_color_cycle(SAFE.colors());
    let styles = Path::new(env!("CARGO_MANIFEST_DIR")).join("styles");
    use_style(styles.join("ebl_dark.toml")).unwrap();
    assert_eq!(rc::style().name, "ebl_dark");
    assert_eq!(rc::color_cycle(), BRAND.colors::<RGB8>());
    assert!(matches!(use_style(styles.join("missing.toml")),
                     Err(Error::Io(_))));
    assert_eq!(rc::style().name, "ebl_dark");

    rc::reset();
    assert!(rc::colormap_names().is_empty());
    assert_eq!(rc::color_cycle(), initial);
    assert_eq!(rc::style(), StyleSheet::bright());
}
