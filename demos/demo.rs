//! Generate the demo figures of the Economic Brain Lab palettes.
//!
//! Run with `cargo run --example demo`; figures land in `./figures`.

use std::{error::Error, path::Path};
use ebl_palette::{register_colormaps, use_palette, rc, write_all, FIGURES_DIR};

type Err = Box<dyn Error>;

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

fn main() -> Result<(), Err> {
    init_tracing();
    register_colormaps()?;
    use_palette(false);
    tracing::info!(colormaps = ?rc::colormap_names(), "palettes installed");

    let styles = Path::new(env!("CARGO_MANIFEST_DIR")).join("styles");
    let paths = write_all(styles, FIGURES_DIR)?;
    println!("Created {} demo figures in ./{FIGURES_DIR}", paths.len());
    Ok(())
}
