//! Demo figures for visual inspection of the palettes.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use rand::distributions::Distribution;
use rand::{rngs::StdRng, SeedableRng};
use rgb::RGB8;
use statrs::distribution::Normal;
use tracing::info;
use crate::figure::{bars, heatmap, lines, scatter, swatches, titled, Figure,
                    Marker};
use crate::{cycle_colors, div_cran_mint_cmap, rc, seq_apricot_cmap,
            seq_mint_cmap, Axes, Normalize, Result, StyleSheet, BRAND, SAFE};

/// Directory the demo program writes into.
pub const FIGURES_DIR: &str = "figures";

/// Style sheet file, figure suffix and `dark` flag of each variant
/// written by [`write_all`].
pub const VARIANTS: [(&str, &str, bool); 2] = [
    ("ebl.toml", "bright", false),
    ("ebl_dark.toml", "dark", true),
];

/// Heights of the 12 demo bars.
const VALUES: [f64; 12] = [12., 7., 9., 14., 6., 10., 11., 8., 13., 5., 15., 9.];

const SEED: u64 = 42;

/// Bounds of the diverging heatmap.
const DIV_BOUND: f64 = 3.;

/// Bars of the brand palette above bars of the colorblind-safe one,
/// drawn with the active style.
pub fn demo() -> Result<Figure> {
    Figure::render("demo", "Economic Brain Lab Palettes (12)", (10., 4.),
                   &rc::style(), |root, sc| {
        let rows = root.split_evenly((2, 1));
        bars(&titled(&rows[0], "Brand", sc)?, &VALUES,
             &BRAND.colors::<RGB8>(), sc)?;
        bars(&titled(&rows[1], "Colorblind-Safe", sc)?, &VALUES,
             &SAFE.colors::<RGB8>(), sc)
    })
}

/// `rows × cols` samples of N(`mean`, `sd`).
fn normal(rng: &mut StdRng, mean: f64, sd: f64, rows: usize, cols: usize)
          -> Result<Vec<Vec<f64>>> {
    let dist = Normal::new(mean, sd)?;
    Ok((0 .. rows)
       .map(|_| (0 .. cols).map(|_| dist.sample(&mut *rng)).collect())
       .collect())
}

/// Activate `style` and render the five demo figures, their names
/// suffixed with `suffix`.  Outlines are light when `dark`.
pub fn plot_all(style: StyleSheet, suffix: &str, dark: bool)
                -> Result<Vec<Figure>> {
    rc::set_style(style.clone())?;
    let style = StyleSheet {
        edge_color: if dark { "#FFF8E6" } else { "#2B2B2B" }.to_string(),
        ..style
    };
    info!(style = %style.name, suffix, "rendering demo figures");
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut figures = Vec::with_capacity(5);

    figures.push(Figure::render(
        format!("demo_categorical_bars_{suffix}"),
        format!("Categorical Bar — EBL Brand vs Colorblind-Safe (12) [{suffix}]"),
        (10., 6.), &style, |root, sc| {
            let rows = root.split_evenly((2, 1));
            let top = titled(&rows[0], "EBL Brand Palette (12)", sc)?;
            bars(&top, &VALUES, &BRAND.colors::<RGB8>(), sc)?;
            let bottom = titled(&rows[1], "EBL Colorblind-Safe Palette (12)",
                                sc)?;
            bars(&bottom, &VALUES, &SAFE.colors::<RGB8>(), sc)
        })?);

    let mut ax = Axes::new();
    cycle_colors(Some(&mut ax), false);
    let series: Vec<(RGB8, Vec<(f64, f64)>)> = (0 .. 12).map(|i| {
        let shift = 0.3 * i as f64;
        let pts = (0 .. 200).map(|k| {
            let x = 2. * PI * k as f64 / 199.;
            (x, (x + shift).sin() + 0.1 * i as f64)
        }).collect();
        (ax.next_color(), pts)
    }).collect();
    figures.push(Figure::render(
        format!("demo_lines_brand_{suffix}"),
        format!("Line Plot — 12 Series (Brand) [{suffix}]"),
        (10., 4.), &style, |root, sc| lines(root, &series, sc))?);

    let xs = normal(&mut rng, 0., 1., 12, 40)?;
    let ys = normal(&mut rng, 0., 1., 12, 40)?;
    let groups: Vec<(RGB8, Marker, Vec<(f64, f64)>)> = Marker::ALL.iter()
        .enumerate()
        .map(|(i, &m)| {
            let pts = xs[i].iter().zip(&ys[i])
                .map(|(&x, &y)| (x, y + 0.2 * i as f64))
                .collect();
            (SAFE.color(i), m, pts)
        }).collect();
    figures.push(Figure::render(
        format!("demo_scatter_safe_{suffix}"),
        format!("Scatter — Colorblind-Safe Palette [{suffix}]"),
        (8., 6.), &style, |root, sc| scatter(root, &groups, 5, sc))?);

    let mut seq = normal(&mut rng, 0.5, 0.15, 10, 20)?;
    seq.iter_mut().flatten().for_each(|v| *v = v.clamp(0., 1.));
    let div = normal(&mut rng, 0., 1., 15, 30)?;
    let seq_norm = Normalize::autoscale(seq.iter().flatten());
    figures.push(Figure::render(
        format!("demo_heatmaps_{suffix}"),
        format!("Sequential Mint, Sequential Apricot, Diverging Cranberry↔Mint \
                 [{suffix}]"),
        (12., 3.), &style, |root, sc| {
            let panels = root.split_evenly((1, 3));
            heatmap(&titled(&panels[0], "Sequential — Mint", sc)?,
                    &seq, &seq_mint_cmap(), seq_norm, sc)?;
            heatmap(&titled(&panels[1], "Sequential — Apricot", sc)?,
                    &seq, &seq_apricot_cmap(), seq_norm, sc)?;
            heatmap(&titled(&panels[2], "Diverging — Cranberry↔Mint", sc)?,
                    &div, &div_cran_mint_cmap(),
                    Normalize::new(-DIV_BOUND, DIV_BOUND), sc)
        })?);

    figures.push(Figure::render(
        format!("demo_swatches_{suffix}"),
        format!("EBL Brand vs Colorblind-Safe — Categorical (12) [{suffix}]"),
        (10., 2.8), &style, |root, sc| {
            let rows = root.split_evenly((2, 1));
            swatches(&titled(&rows[0], "EBL Brand — Categorical (12)", sc)?,
                     &BRAND.colors::<RGB8>(), sc)?;
            swatches(&titled(&rows[1],
                             "EBL Colorblind-Safe — Categorical (12)", sc)?,
                     &SAFE.colors::<RGB8>(), sc)
        })?);

    Ok(figures)
}

/// Render the demo figures with the style sheets of [`VARIANTS`],
/// read from `styles`, and save them in `dir`.  Returns the written
/// paths.
pub fn write_all(styles: impl AsRef<Path>, dir: impl AsRef<Path>)
                 -> Result<Vec<PathBuf>> {
    let (styles, dir) = (styles.as_ref(), dir.as_ref());
    let mut paths = Vec::new();
    for (file, suffix, dark) in VARIANTS {
        let sheet = StyleSheet::load(styles.join(file))?;
        for fig in plot_all(sheet, suffix, dark)? {
            paths.push(fig.save(dir)?);
        }
    }
    Ok(paths)
}
