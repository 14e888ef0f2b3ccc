use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised by palette lookup, colormap registration, style
/// loading and figure export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown palette “{0}”")]
    UnknownPalette(String),

    #[error("unknown colormap “{0}”")]
    UnknownColormap(String),

    #[error("a colormap named “{0}” is already registered")]
    ColormapExists(String),

    #[error("not a #RRGGBB color: “{0}”")]
    InvalidColor(String),

    #[error("style sheet error: {0}")]
    StyleSheet(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the embedded font could not be loaded")]
    Font,

    #[error("drawing error: {0}")]
    Drawing(String),

    #[error("invalid distribution: {0}")]
    Distribution(#[from] statrs::StatsError),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where E: std::error::Error + Send + Sync {
    fn from(e: DrawingAreaErrorKind<E>) -> Self { Error::Drawing(e.to_string()) }
}

pub type Result<T> = std::result::Result<T, Error>;
