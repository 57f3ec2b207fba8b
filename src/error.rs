use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CardError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Formatting the SVG document failed
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid layout parameters: {0}")]
    /// The layout request had a non-positive width, size, or line count
    InvalidLayoutParameters(String),

    #[error("font provider failure: {0}")]
    /// The font returned data that can't be laid out (negative widths, no em square, ...)
    FontProvider(String),

    #[error(transparent)]
    /// [usvg] failed to parse the assembled card
    Svg(#[from] usvg::Error),

    #[error("render failure: {0}")]
    /// The rasterizer could not produce a PNG from a parsed card
    Render(String),

    #[error("configuration error: {0}")]
    /// The configuration file could not be parsed
    Config(String),
}
