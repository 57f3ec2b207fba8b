//! Vector outlines of laid-out text.

use crate::units::Px;
use std::fmt::Write;

/// A single drawing command in canvas coordinates (y pointing down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { x1: f32, y1: f32, x: f32, y: f32 },
    CurveTo { x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32 },
    Close,
}

/// The geometry of a run of glyphs, ready to be placed in an SVG `<path>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    pub commands: Vec<PathCommand>,
}

impl GlyphPath {
    pub fn new() -> GlyphPath {
        GlyphPath::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize the commands as SVG path data (the `d` attribute), rounding
    /// every coordinate to `decimals` places and dropping trailing zeros
    pub fn to_path_data(&self, decimals: usize) -> String {
        let mut d = String::new();
        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo { x, y } => push_command(&mut d, 'M', &[x, y], decimals),
                PathCommand::LineTo { x, y } => push_command(&mut d, 'L', &[x, y], decimals),
                PathCommand::QuadTo { x1, y1, x, y } => {
                    push_command(&mut d, 'Q', &[x1, y1, x, y], decimals)
                }
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => push_command(&mut d, 'C', &[x1, y1, x2, y2, x, y], decimals),
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

fn push_command(d: &mut String, op: char, values: &[f32], decimals: usize) {
    d.push(op);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format_number(*value, decimals));
    }
}

/// `12.50` becomes `12.5`, `3.00` becomes `3`, and `-0.00` becomes `0`
pub(crate) fn format_number(value: f32, decimals: usize) -> String {
    let mut s = String::new();
    // writing to a String can't fail
    let _ = write!(s, "{value:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Receives glyph outlines from [owned_ttf_parser] in font units and appends
/// them to a [GlyphPath], scaled to the font size, flipped so that y points
/// down, and offset to the current pen position
pub(crate) struct PathSink<'p> {
    path: &'p mut GlyphPath,
    origin: (f32, f32),
    scale: f32,
}

impl<'p> PathSink<'p> {
    pub(crate) fn new(path: &'p mut GlyphPath, origin: (Px, Px), scale: f32) -> PathSink<'p> {
        PathSink {
            path,
            origin: (*origin.0, *origin.1),
            scale,
        }
    }

    /// Move the pen for the next glyph
    pub(crate) fn set_origin(&mut self, origin: (Px, Px)) {
        self.origin = (*origin.0, *origin.1);
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin.0 + x * self.scale, self.origin.1 - y * self.scale)
    }
}

impl owned_ttf_parser::OutlineBuilder for PathSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::LineTo { x, y });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::QuadTo { x1, y1, x, y });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.path.push(PathCommand::Close);
    }
}
