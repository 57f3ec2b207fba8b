use crate::colour::{colours, Colour};
use crate::error::CardError;
use crate::units::Px;

/// How each line sits horizontally within the width budget
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Everything needed to lay out one block of text
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    /// The text to lay out
    pub text: String,
    /// The width budget every line must fit within
    pub max_width: Px,
    /// Drives both measurement and glyph scale, and through the font's
    /// vertical metrics, the row height
    pub font_size: Px,
    pub align: Align,
    /// Lines beyond this are silently dropped
    pub max_lines: usize,
    pub colour: Colour,
}

impl LayoutRequest {
    /// Create a left-aligned, single line, black request
    pub fn new<S: ToString>(text: S, max_width: Px, font_size: Px) -> LayoutRequest {
        LayoutRequest {
            text: text.to_string(),
            max_width,
            font_size,
            align: Align::default(),
            max_lines: 1,
            colour: colours::BLACK,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Reject requests that can't be laid out. Checked before any measuring happens
    pub fn validate(&self) -> Result<(), CardError> {
        if !self.max_width.is_finite() || self.max_width <= Px(0.0) {
            return Err(CardError::InvalidLayoutParameters(format!(
                "max width must be positive, got {}",
                self.max_width
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= Px(0.0) {
            return Err(CardError::InvalidLayoutParameters(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.max_lines == 0 {
            return Err(CardError::InvalidLayoutParameters(
                "max lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
