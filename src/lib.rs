mod card;
pub use card::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod font;
pub use font::*;

/// Wrapping, aligning, and outlining blocks of text
pub mod layout;

mod metrics;
pub use metrics::*;

mod path;
pub use path::{GlyphPath, PathCommand};

/// Turning finished cards into PNGs
pub mod raster;

mod rect;
pub use rect::*;

/// Serving cards over HTTP
pub mod server;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
