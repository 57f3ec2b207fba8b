use crate::units::*;

/// A rectangle on the canvas, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, top-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (typically, top-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (typically, bottom-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (typically, bottom-right) corner.
    pub y2: Px,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn from_xywh(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}
