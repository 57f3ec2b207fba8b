//! Placement of groups on the card.

use crate::path::format_number;
use crate::units::*;

/// Moves a group of content, as used by the SVG `transform` attribute.
///
/// SVG's coordinate system has (0,0) at the top-left with y pointing down, so
/// positive offsets move content right and down.
///
/// ```
/// use card_gen::{Transform, Px};
///
/// let transform = Transform::translate(Px(150.0), Px(470.5));
/// assert_eq!(transform.to_svg(), "translate(150, 470.5)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: Px,
    pub y: Px,
}

impl Transform {
    /// Create a translation transform
    pub fn translate(x: Px, y: Px) -> Self {
        Transform { x, y }
    }

    /// Format as the value of an SVG `transform` attribute
    pub fn to_svg(&self) -> String {
        format!(
            "translate({}, {})",
            format_number(*self.x, 4),
            format_number(*self.y, 4)
        )
    }
}
