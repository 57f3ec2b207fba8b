//! Text layout: turning a string into positioned glyph outlines.
//!
//! Laying out a block of text happens in one pass:
//!
//! 1. [`segment_lines`](crate::layout::segment_lines) wraps the text character by
//!    character, re-measuring the growing line with the font each time
//! 2. [`measure_line`](crate::layout::measure_line) and
//!    [`position_line`](crate::layout::position_line) place each line according
//!    to its alignment
//! 3. [`render_line`](crate::layout::render_line) converts each line into an outline
//! 4. [`truncate_lines`](crate::layout::truncate_lines) drops lines past the limit
//! 5. [`join_fragments`](crate::layout::join_fragments) serializes the result as SVG
//!
//! [`layout_text`](crate::layout::layout_text) runs the whole pipeline.
//!
//! # Example
//!
//! ```no_run
//! use card_gen::{Font, Px};
//! use card_gen::layout::{layout_text, Align, LayoutRequest};
//!
//! let font = Font::load_from_disk("assets/Kaisei_Tokumin/KaiseiTokumin-Bold.ttf")
//!     .expect("can load font");
//!
//! let request = LayoutRequest::new("by 名無しの太郎之介", Px(900.0), Px(48.0))
//!     .with_align(Align::Right);
//! let block = layout_text(&font, &request).expect("can lay out text");
//! assert_eq!(block.len(), 1);
//! ```

mod lines;
mod request;
mod text;

pub use lines::*;
pub use request::*;
pub use text::*;
