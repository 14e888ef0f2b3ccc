//! Figures drawn with `plotters` into an RGB buffer and exported as
//! PNG.
//!
//! Text is set in DejaVu Sans, embedded in the crate and registered
//! with `plotters` on first use.

use std::ops;
use std::path::{Path, PathBuf};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use lazy_static::lazy_static;
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{EmptyElement, PathElement, Polygon, Rectangle, Text};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, Color as _, FontStyle, IntoFont,
                      RGBColor as PlotColor, TextStyle};
use rgb::RGB8;
use tracing::{info, warn};
use crate::style::StyleColors;
use crate::{ColorRange, Colormap, Error, Normalize, RGBColor, Result,
            StyleSheet};

const FAMILY: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

lazy_static! {
    static ref FONT_LOADED: bool = {
        let ok = register_font(FAMILY, FontStyle::Normal, DEJAVU_SANS).is_ok();
        if !ok { warn!("embedded font rejected") }
        ok
    };
}

fn load_font() -> Result<()> {
    if *FONT_LOADED { Ok(()) } else { Err(Error::Font) }
}

fn text_style(px: f64, color: RGB8) -> TextStyle<'static> {
    (FAMILY, px).into_font().color(&pc(color))
}

/// A rendered figure.
#[derive(Clone, Debug)]
pub struct Figure {
    name: String,
    title: String,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl Figure {
    /// Render a `size` (in inches, converted with the style's dpi)
    /// figure filled with the style's background, `title` on top.
    /// `draw` gets the area below the title.
    pub(crate) fn render<F>(name: impl Into<String>, title: impl Into<String>,
                            size: (f64, f64), style: &StyleSheet, draw: F)
                            -> Result<Figure>
    where F: for<'b> FnOnce(&DrawingArea<BitMapBackend<'b>, Shift>,
                            &StyleColors) -> Result<()> {
        load_font()?;
        let title = title.into();
        let colors = style.colors()?;
        let (width, height) = style.pixels(size);
        let mut buf = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height))
                .into_drawing_area();
            root.fill(&pc(colors.figure))?;
            let body = root.titled(
                &title, text_style(1.25 * colors.text_px, colors.text))?;
            draw(&body, &colors)?;
            root.present()?;
        }
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&buf, width, height, ExtendedColorType::Rgb8)?;
        Ok(Figure { name: name.into(), title, width, height, png })
    }

    /// File stem under which the figure is saved.
    pub fn name(&self) -> &str { &self.name }

    pub fn title(&self) -> &str { &self.title }

    /// Size in pixels.
    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }

    /// The PNG encoded image.
    pub fn png(&self) -> &[u8] { &self.png }

    /// Write the figure to `dir/<name>.png`, creating `dir` if needed.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.png", self.name));
        std::fs::write(&path, &self.png)?;
        info!(path = %path.display(), title = %self.title, "figure written");
        Ok(path)
    }
}

#[inline]
pub(crate) fn pc(c: RGB8) -> PlotColor { PlotColor(c.r, c.g, c.b) }

/// Write `title` on top of `area`; returns the area below it.
pub(crate) fn titled<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                         title: &str, sc: &StyleColors)
                                         -> Result<DrawingArea<DB, Shift>> {
    Ok(area.titled(title, text_style(sc.text_px, sc.text))?)
}

/// Margin around a chart: 12 pixels, less on small areas.
fn margin<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> i32 {
    let (w, h) = area.dim_in_pixel();
    12.min(w.min(h) as i32 / 8)
}

type Chart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Cartesian axes over `x × y` with background, horizontal grid
/// lines and a frame.
fn axes<'a, DB: DrawingBackend>(area: &'a DrawingArea<DB, Shift>,
                                x: ops::Range<f64>, y: ops::Range<f64>,
                                sc: &StyleColors) -> Result<Chart<'a, DB>> {
    let mut chart = ChartBuilder::on(area)
        .margin(margin(area))
        .build_cartesian_2d(x.clone(), y.clone())?;
    let corners = [(x.start, y.start), (x.end, y.end)];
    chart.draw_series([Rectangle::new(corners, pc(sc.axes).filled())])?;
    const GRID_LINES: usize = 5;
    chart.draw_series((1 .. GRID_LINES).map(|i| {
        let yi = y.start + (y.end - y.start) * i as f64 / GRID_LINES as f64;
        PathElement::new(vec![(x.start, yi), (x.end, yi)],
                         pc(sc.grid).stroke_width(1))
    }))?;
    chart.draw_series([Rectangle::new(corners,
                                      pc(sc.axes_edge).stroke_width(1))])?;
    Ok(chart)
}

/// Bounds of `values` widened by 5% on each side.
fn padded(values: impl Iterator<Item = f64>) -> ops::Range<f64> {
    let (lo, hi) = values.filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY),
              |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() { return -1. .. 1. }
    if hi - lo < 1e-10 { return lo - 1. .. hi + 1. }
    let pad = 0.05 * (hi - lo);
    lo - pad .. hi + pad
}

/// One bar per value, colored with `colors` (cycled).
pub(crate) fn bars<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                       values: &[f64], colors: &[RGB8],
                                       sc: &StyleColors) -> Result<()> {
    let n = values.len().max(1) as f64;
    let top = values.iter().copied().fold(0., f64::max) * 1.1;
    let mut chart = axes(area, 0. .. n, 0. .. top.max(1.), sc)?;
    let bar = |i: usize, v: f64| [(i as f64 + 0.1, 0.), (i as f64 + 0.9, v)];
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Rectangle::new(bar(i, v), pc(colors[i % colors.len()]).filled())
    }))?;
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Rectangle::new(bar(i, v), pc(sc.edge).stroke_width(1))
    }))?;
    Ok(())
}

/// Polylines, one per `(color, points)`.
pub(crate) fn lines<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                        series: &[(RGB8, Vec<(f64, f64)>)],
                                        sc: &StyleColors) -> Result<()> {
    let pts = || series.iter().flat_map(|(_, p)| p.iter());
    let x = padded(pts().map(|p| p.0));
    let y = padded(pts().map(|p| p.1));
    let mut chart = axes(area, x, y, sc)?;
    for (c, points) in series {
        chart.draw_series([PathElement::new(points.clone(),
                                            pc(*c).stroke_width(2))])?;
    }
    Ok(())
}

/// Marker shapes, in the order used to tell categories apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    FilledPlus,
    FilledX,
    Star,
    TriangleLeft,
    TriangleRight,
    Hexagon,
    Plus,
}

impl Marker {
    pub const ALL: [Marker; 12] = [
        Marker::Circle, Marker::Square, Marker::TriangleUp,
        Marker::TriangleDown, Marker::Diamond, Marker::FilledPlus,
        Marker::FilledX, Marker::Star, Marker::TriangleLeft,
        Marker::TriangleRight, Marker::Hexagon, Marker::Plus];

    /// Outline of the marker as a closed polygon centered on (0, 0),
    /// `r` pixels in radius.  Pixel `y` grows downwards.
    pub fn vertices(self, r: i32) -> Vec<(i32, i32)> {
        let r = r.max(2) as f64;
        // Regular polygon with `n` vertices, the first one at angle `a0`
        // (degrees, counterclockwise from the positive x axis).
        let regular = |n: usize, a0: f64, radius: f64| -> Vec<(f64, f64)> {
            (0 .. n).map(|k| {
                let a = (a0 + 360. * k as f64 / n as f64).to_radians();
                (radius * a.cos(), radius * a.sin())
            }).collect()
        };
        let cross = |w: f64| vec![
            (-w, -r), (w, -r), (w, -w), (r, -w), (r, w), (w, w),
            (w, r), (-w, r), (-w, w), (-r, w), (-r, -w), (-w, -w)];
        let pts: Vec<(f64, f64)> = match self {
            Marker::Circle => regular(16, 0., r),
            Marker::Square => regular(4, 45., r),
            Marker::TriangleUp => regular(3, 90., r),
            Marker::TriangleDown => regular(3, 270., r),
            Marker::TriangleLeft => regular(3, 180., r),
            Marker::TriangleRight => regular(3, 0., r),
            Marker::Diamond => regular(4, 0., r),
            Marker::Hexagon => regular(6, 90., r),
            Marker::FilledPlus => cross(0.35 * r),
            Marker::Plus => cross(0.12 * r),
            Marker::FilledX => cross(0.3 * r).into_iter().map(|(x, y)| {
                let s = std::f64::consts::FRAC_1_SQRT_2;
                (s * (x - y), s * (x + y))
            }).collect(),
            Marker::Star => {
                let outer = regular(5, 90., r);
                let inner = regular(5, 126., 0.4 * r);
                outer.into_iter().zip(inner).flat_map(|(o, i)| [o, i])
                    .collect()
            }
        };
        // Flip `y` for pixel coordinates.
        pts.into_iter()
            .map(|(x, y)| (x.round() as i32, (-y).round() as i32))
            .collect()
    }
}

/// Markers for each `(color, marker, points)` group, outlined with the
/// style's edge color.
pub(crate) fn scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    groups: &[(RGB8, Marker, Vec<(f64, f64)>)],
    size: i32, sc: &StyleColors) -> Result<()> {
    let pts = || groups.iter().flat_map(|(_, _, p)| p.iter());
    let x = padded(pts().map(|p| p.0));
    let y = padded(pts().map(|p| p.1));
    let mut chart = axes(area, x, y, sc)?;
    for (c, marker, points) in groups {
        let shape = marker.vertices(size);
        let mut outline = shape.clone();
        outline.push(shape[0]);
        chart.draw_series(points.iter().map(|&p| {
            EmptyElement::at(p)
                + Polygon::new(shape.clone(), pc(*c).filled())
                + PathElement::new(outline.clone(), pc(sc.edge).stroke_width(1))
        }))?;
    }
    Ok(())
}

/// `data` (rows top to bottom) colored through `cmap` after `norm`,
/// with a colorbar on the right.  NaN cells are left in the axes
/// background.
pub(crate) fn heatmap<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                          data: &[Vec<f64>], cmap: &Colormap,
                                          norm: Normalize, sc: &StyleColors)
                                          -> Result<()> {
    let (w, _) = area.dim_in_pixel();
    let (map, bar) = area.split_horizontally(w as i32 * 82 / 100);
    let rows = data.len();
    let cols = data.iter().map(Vec::len).max().unwrap_or(0);
    let mut chart = axes(&map, 0. .. cols.max(1) as f64,
                         0. .. rows.max(1) as f64, sc)?;
    chart.draw_series(data.iter().enumerate().flat_map(|(i, row)| {
        let y = (rows - 1 - i) as f64;
        row.iter().enumerate().map(move |(j, &v)| {
            let c: RGB8 = if v.is_nan() { sc.axes }
                          else { cmap.rgb(norm.apply(v)) };
            Rectangle::new([(j as f64, y), (j as f64 + 1., y + 1.)],
                           pc(c).filled())
        })
    }))?;
    colorbar(&bar, cmap, norm, sc)
}

/// Vertical strip showing `cmap` over \[`norm.vmin`, `norm.vmax`\].
fn colorbar<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                cmap: &Colormap, norm: Normalize,
                                sc: &StyleColors) -> Result<()> {
    let (lo, hi) = (norm.vmin, norm.vmax);
    let hi = if hi > lo { hi } else { lo + 1. };
    let mut chart = axes(area, 0. .. 1., lo .. hi, sc)?;
    let levels = cmap.len();
    // Level edges, uniformly spread over the bar.
    let edges: Vec<f64> = ColorRange::<RGB8>::range(cmap, lo, hi, levels + 1)
        .map(|(v, _)| v).collect();
    chart.draw_series(edges.windows(2).enumerate().map(|(k, e)| {
        let c: RGB8 = cmap.rgb((k as f64 + 0.5) / levels as f64);
        Rectangle::new([(0., e[0]), (1., e[1])], pc(c).filled())
    }))?;
    chart.draw_series([Rectangle::new([(0., lo), (1., hi)],
                                      pc(sc.axes_edge).stroke_width(1))])?;
    Ok(())
}

/// A row of color squares, each with its `#RRGGBB` code below.
pub(crate) fn swatches<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                           colors: &[RGB8], sc: &StyleColors)
                                           -> Result<()> {
    let n = colors.len().max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .margin(margin(area))
        .build_cartesian_2d(0. .. n, -0.4 .. 1.)?;
    chart.draw_series(colors.iter().enumerate().map(|(i, &c)| {
        Rectangle::new([(i as f64, 0.), (i as f64 + 1., 1.)], pc(c).filled())
    }))?;
    let label = text_style(0.75 * sc.text_px, sc.text)
        .pos(Pos::new(HPos::Center, VPos::Top));
    chart.draw_series(colors.iter().enumerate().map(|(i, c)| {
        Text::new(c.to_hex(), (i as f64 + 0.5, -0.1), label.clone())
    }))?;
    chart.draw_series([Rectangle::new([(0., 0.), (n, 1.)],
                                      pc(sc.axes_edge).stroke_width(1))])?;
    Ok(())
}
