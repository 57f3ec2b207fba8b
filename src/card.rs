use crate::{
    colour::Colour,
    layout::{layout_text, Align, LayoutRequest},
    CardError, FontMetrics, Px, Rect, Transform,
};
use std::fmt::Write;

/// Canvas dimensions as (width, height) in pixels.
pub type CanvasSize = (Px, Px);

/// The size social networks expect for link preview images
pub const OGP: CanvasSize = (Px(1200.0), Px(630.0));

/// A region of the card that holds one block of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Moves the block's top-left corner into place on the canvas
    pub transform: Transform,
    pub max_width: Px,
    pub font_size: Px,
    pub align: Align,
    pub max_lines: usize,
    pub colour: Colour,
}

impl TextBlock {
    fn request(&self, text: &str) -> LayoutRequest {
        LayoutRequest::new(text, self.max_width, self.font_size)
            .with_align(self.align)
            .with_max_lines(self.max_lines)
            .with_colour(self.colour)
    }
}

/// A title card: a rounded panel with a drop shadow on a plain background,
/// holding a title and an attribution line.
///
/// The default card is the one the server renders; fields are public so other
/// layouts can be built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub size: CanvasSize,
    pub background: Colour,
    pub panel: Rect,
    /// Vertical corner radius of the panel
    pub panel_radius: Px,
    pub panel_colour: Colour,
    pub title: TextBlock,
    pub attribution: TextBlock,
}

impl Default for Card {
    fn default() -> Self {
        Card {
            size: OGP,
            background: Colour::new_grey_bytes(0xe9),
            panel: Rect::from_xywh(Px(40.0), Px(40.0), Px(1110.0), Px(540.0)),
            panel_radius: Px(40.0),
            panel_colour: Colour::new_rgb_bytes(0xf6, 0xfa, 0xfd),
            title: TextBlock {
                transform: Transform::translate(Px(150.0), Px(150.0)),
                max_width: Px(900.0),
                font_size: Px(64.0),
                align: Align::Center,
                max_lines: 3,
                colour: Colour::new_grey_bytes(0x55),
            },
            attribution: TextBlock {
                transform: Transform::translate(Px(150.0), Px(470.0)),
                max_width: Px(900.0),
                font_size: Px(48.0),
                align: Align::Right,
                max_lines: 1,
                colour: Colour::new_grey_bytes(0xcc),
            },
        }
    }
}

impl Card {
    /// Lay out the title and attribution with `metrics` and assemble the whole
    /// card as an SVG document. Text is embedded as outlines, so the document
    /// renders identically without the font installed.
    pub fn to_svg<M: FontMetrics + ?Sized>(
        &self,
        metrics: &M,
        title: &str,
        attribution: &str,
    ) -> Result<String, CardError> {
        let title = layout_text(metrics, &self.title.request(title))?;
        let attribution = layout_text(metrics, &self.attribution.request(attribution))?;

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.size.0, self.size.1
        )?;

        // a soft shadow down and to the right of the panel
        writeln!(svg, "<defs>")?;
        writeln!(svg, r#"<filter id="shadow" x="-0.0164" y="-0.0312">"#)?;
        writeln!(
            svg,
            r#"<feFlood flood-opacity="0.1" flood-color="rgb(0,0,0)" result="flood"/>"#
        )?;
        writeln!(
            svg,
            r#"<feComposite in="flood" in2="SourceGraphic" operator="in" result="composite1"/>"#
        )?;
        writeln!(
            svg,
            r#"<feGaussianBlur in="composite1" stdDeviation="4.1" result="blur"/>"#
        )?;
        writeln!(svg, r#"<feOffset dx="2.4" dy="2.4" result="offset"/>"#)?;
        writeln!(
            svg,
            r#"<feComposite in="SourceGraphic" in2="offset" operator="over" result="composite2"/>"#
        )?;
        writeln!(svg, "</filter>")?;
        writeln!(svg, "</defs>")?;

        writeln!(
            svg,
            r#"<rect fill="{}" width="100%" height="100%"/>"#,
            self.background
        )?;
        writeln!(
            svg,
            r#"<rect fill="{}" x="{}" y="{}" width="{}" height="{}" ry="{}" filter="url(#shadow)"/>"#,
            self.panel_colour,
            self.panel.x1,
            self.panel.y1,
            self.panel.width(),
            self.panel.height(),
            self.panel_radius
        )?;

        writeln!(
            svg,
            r#"<g transform="{}">{}</g>"#,
            self.title.transform.to_svg(),
            title.to_svg()
        )?;
        writeln!(
            svg,
            r#"<g transform="{}">{}</g>"#,
            self.attribution.transform.to_svg(),
            attribution.to_svg()
        )?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}
