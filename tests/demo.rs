//! Demo figures.  Everything that activates a style sheet runs in one
//! test, the active style being process-wide.

use std::collections::BTreeSet;
use std::path::Path;
use ebl_palette::*;

fn shipped_styles() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("styles")
}

#[test]
fn demo_figures() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_all(shipped_styles(), dir.path()).unwrap();
    assert_eq!(paths.len(), 10);

    let names: BTreeSet<String> = paths.iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let mut expected = BTreeSet::new();
    for suffix in ["bright", "dark"] {
        for kind in ["categorical_bars", "lines_brand", "scatter_safe",
                     "heatmaps", "swatches"] {
            expected.insert(format!("demo_{kind}_{suffix}.png"));
        }
    }
    assert_eq!(names, expected);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 10);

    for p in &paths {
        assert!(p.starts_with(dir.path()));
        let bytes = std::fs::read(p).unwrap();
        assert_eq!(&bytes[1 .. 4], b"PNG", "{}", p.display());
    }
    // The last variant stays active.
    assert_eq!(rc::style().name, "ebl_dark");

    // Sheets are read from the given directory.
    let styles = tempfile::tempdir().unwrap();
    for (file, _, _) in VARIANTS {
        let sheet = std::fs::read_to_string(shipped_styles().join(file))
            .unwrap()
            .replace("dpi = 100", "dpi = 20");
        std::fs::write(styles.path().join(file), sheet).unwrap();
    }
    let out = tempfile::tempdir().unwrap();
    let paths = write_all(styles.path(), out.path()).unwrap();
    assert_eq!(paths.len(), 10);
    let swatches = out.path().join("demo_swatches_dark.png");
    assert_eq!(image::image_dimensions(&swatches).unwrap(), (200, 56));

    let empty = tempfile::tempdir().unwrap();
    assert!(matches!(write_all(empty.path(), out.path()), Err(Error::Io(_))));

    let small = StyleSheet { dpi: 30, ..StyleSheet::bright() };
    let figs = plot_all(small, "small", false).unwrap();
    assert_eq!(figs.len(), 5);
    assert_eq!(figs[0].name(), "demo_categorical_bars_small");
    assert_eq!(figs[0].size(), (300, 180));
    assert_eq!(figs[3].size(), (360, 90));
    assert!(figs[2].title().contains("Colorblind-Safe"));

    let fig = demo().unwrap();
    assert_eq!(fig.name(), "demo");
    assert_eq!(fig.size(), (300, 120));
    let saved = fig.save(dir.path().join("nested")).unwrap();
    assert!(saved.ends_with("nested/demo.png"));
}

#[test]
fn save_into_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let fig = ebl_palette::demo().unwrap();
    assert!(matches!(fig.save(&blocker), Err(Error::Io(_))));
}
