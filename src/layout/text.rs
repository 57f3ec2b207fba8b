use super::lines::{measure_line, segment_lines, Line};
use super::request::{Align, LayoutRequest};
use crate::colour::Colour;
use crate::error::CardError;
use crate::metrics::FontMetrics;
use crate::path::GlyphPath;
use crate::units::Px;
use log::debug;

/// Decimal places used for coordinates in serialized path data
pub const PATH_DECIMALS: usize = 2;

/// One laid-out line: its outline, where it was placed, and how to fill it
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedPath {
    pub line: Line,
    /// The measured advance width of the line
    pub width: Px,
    /// The pen position of the first glyph, on the baseline
    pub origin: (Px, Px),
    pub colour: Colour,
    pub path: GlyphPath,
}

impl PositionedPath {
    /// Serialize as an SVG `<path>` element
    pub fn to_svg(&self) -> String {
        format!(
            r#"<path d="{}" fill="{}"/>"#,
            self.path.to_path_data(PATH_DECIMALS),
            self.colour
        )
    }
}

/// The positioned lines of one block of text, first line first
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub lines: Vec<PositionedPath>,
    /// The distance between successive baselines
    pub row_height: Px,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole block as a run of SVG `<path>` elements, ready to embed in a document
    pub fn to_svg(&self) -> String {
        join_fragments(&self.lines)
    }
}

/// Calculates where a line's baseline starts. Every line is aligned on its own,
/// so a centred block is a stack of individually centred lines. The first
/// baseline sits one row below the top of the block.
pub fn position_line(
    index: usize,
    line_width: Px,
    max_width: Px,
    align: Align,
    row_height: Px,
) -> (Px, Px) {
    let x = match align {
        Align::Left => Px(0.0),
        Align::Right => max_width - line_width,
        Align::Center => (max_width - line_width) / 2.0,
    };
    let y = row_height * index as f32 + row_height;
    (x, y)
}

/// Convert a line of text into its outline at the given baseline origin
pub fn render_line<M: FontMetrics + ?Sized>(
    line: &Line,
    width: Px,
    origin: (Px, Px),
    font_size: Px,
    colour: Colour,
    metrics: &M,
) -> Result<PositionedPath, CardError> {
    let path = metrics.outline(line.as_str(), origin, font_size)?;
    Ok(PositionedPath {
        line: line.clone(),
        width,
        origin,
        colour,
        path,
    })
}

/// Keep only the first `max_lines` items. Anything after that is dropped without
/// any marker; callers that want an ellipsis need to add one themselves.
pub fn truncate_lines<T>(mut lines: Vec<T>, max_lines: usize) -> Vec<T> {
    lines.truncate(max_lines);
    lines
}

/// Concatenate the SVG of each path, in order
pub fn join_fragments(paths: &[PositionedPath]) -> String {
    paths.iter().map(PositionedPath::to_svg).collect()
}

/// Lays out a block of text: wraps it character by character to fit
/// `max_width`, aligns each line, converts the lines to outlines, and drops
/// any lines past `max_lines`.
///
/// Coordinates are relative to the top left corner of the block; translate
/// the result to place it on a canvas.
///
/// # Example
///
/// ```no_run
/// use card_gen::{Font, Px};
/// use card_gen::layout::{layout_text, Align, LayoutRequest};
///
/// let font = Font::load_from_disk("assets/Kaisei_Tokumin/KaiseiTokumin-Bold.ttf")
///     .expect("can load font");
/// let request = LayoutRequest::new("Hello, world", Px(900.0), Px(64.0))
///     .with_align(Align::Center)
///     .with_max_lines(3);
/// let block = layout_text(&font, &request).expect("can lay out text");
/// println!("<g>{}</g>", block.to_svg());
/// ```
pub fn layout_text<M: FontMetrics + ?Sized>(
    metrics: &M,
    request: &LayoutRequest,
) -> Result<LayoutResult, CardError> {
    request.validate()?;
    let row_height = metrics.row_height(request.font_size)?;

    let lines = segment_lines(
        &request.text,
        request.font_size,
        request.max_width,
        metrics,
    )?;
    debug!(
        "segmented {} chars into {} lines at {}px",
        request.text.chars().count(),
        lines.len(),
        request.font_size
    );

    let mut paths: Vec<PositionedPath> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let width = measure_line(line.as_str(), request.font_size, metrics)?;
        let origin = position_line(
            index,
            width,
            request.max_width,
            request.align,
            row_height,
        );
        paths.push(render_line(
            line,
            width,
            origin,
            request.font_size,
            request.colour,
            metrics,
        )?);
    }

    if paths.len() > request.max_lines {
        debug!(
            "dropping {} lines past the limit of {}",
            paths.len() - request.max_lines,
            request.max_lines
        );
    }
    let lines = truncate_lines(paths, request.max_lines);

    Ok(LayoutResult { lines, row_height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::metrics::tests::FixedMetrics;
    use approx::assert_relative_eq;

    #[test]
    fn positions_by_alignment() {
        let row = Px(80.0);
        assert_eq!(
            position_line(0, Px(300.0), Px(900.0), Align::Left, row),
            (Px(0.0), Px(80.0))
        );
        assert_eq!(
            position_line(1, Px(300.0), Px(900.0), Align::Right, row),
            (Px(600.0), Px(160.0))
        );
        assert_eq!(
            position_line(2, Px(300.0), Px(900.0), Align::Center, row),
            (Px(300.0), Px(240.0))
        );
    }

    #[test]
    fn oversized_lines_hang_off_the_left_when_right_aligned() {
        let (x, _) = position_line(0, Px(120.0), Px(100.0), Align::Right, Px(10.0));
        assert_eq!(x, Px(-20.0));
    }

    #[test]
    fn truncation_keeps_leading_items() {
        assert_eq!(truncate_lines(vec![1, 2, 3, 4], 2), vec![1, 2]);
        assert_eq!(truncate_lines(vec![1, 2], 5), vec![1, 2]);
        assert_eq!(truncate_lines(vec![1, 2], 2), vec![1, 2]);
    }

    #[test]
    fn short_title_is_one_centred_line() {
        let metrics = FixedMetrics::new(500.0);
        let request = LayoutRequest::new("Hello, world", Px(900.0), Px(64.0))
            .with_align(Align::Center)
            .with_max_lines(3);
        let result = layout_text(&metrics, &request).unwrap();

        assert_eq!(result.len(), 1);
        let line = &result.lines[0];
        assert_eq!(line.line.as_str(), "Hello, world");
        // 12 chars at 32px each
        assert_relative_eq!(*line.width, 384.0);
        assert_relative_eq!(*line.origin.0, (900.0 - 384.0) / 2.0);
        assert_relative_eq!(*line.origin.1, *result.row_height);
        assert_relative_eq!(*result.row_height, 64.0);
    }

    #[test]
    fn long_text_truncates_to_the_first_line() {
        let metrics = FixedMetrics::new(1000.0);
        let text = "あ".repeat(200);
        let request = LayoutRequest::new(&text, Px(900.0), Px(64.0));
        let result = layout_text(&metrics, &request).unwrap();

        assert_eq!(result.len(), 1);
        // 14 chars fit in 900px at 64px each
        assert_eq!(result.lines[0].line.as_str(), "あ".repeat(14));
        assert_eq!(result.lines[0].origin, (Px(0.0), Px(64.0)));
    }

    #[test]
    fn dropped_lines_are_the_trailing_ones() {
        let metrics = FixedMetrics::new(1000.0);
        let request =
            LayoutRequest::new("aaaabbbbccccdddd", Px(40.0), Px(10.0)).with_max_lines(2);
        let result = layout_text(&metrics, &request).unwrap();
        let lines: Vec<&str> = result.lines.iter().map(|p| p.line.as_str()).collect();
        assert_eq!(lines, vec!["aaaa", "bbbb"]);
        assert_eq!(result.lines[1].origin.1, Px(20.0));
    }

    #[test]
    fn every_line_is_aligned_on_its_own() {
        let metrics = FixedMetrics::new(1000.0);
        let request = LayoutRequest::new("aaaaab", Px(50.0), Px(10.0))
            .with_align(Align::Right)
            .with_max_lines(2);
        let result = layout_text(&metrics, &request).unwrap();
        assert_eq!(result.len(), 2);
        for line in result.lines.iter() {
            assert_relative_eq!(*line.origin.0 + *line.width, 50.0);
        }
        assert_eq!(result.lines[1].origin.0, Px(40.0));
    }

    #[test]
    fn empty_text_is_one_empty_fragment() {
        let metrics = FixedMetrics::new(1000.0);
        let request = LayoutRequest::new("", Px(900.0), Px(64.0)).with_align(Align::Center);
        let result = layout_text(&metrics, &request).unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.lines[0].path.is_empty());
        assert_eq!(result.lines[0].origin, (Px(450.0), Px(64.0)));
        assert_eq!(result.to_svg(), r##"<path d="" fill="#000000"/>"##);
    }

    #[test]
    fn invalid_requests_are_rejected_before_measuring() {
        let metrics = FixedMetrics::new(1000.0);
        let request = LayoutRequest::new("abc", Px(900.0), Px(64.0)).with_max_lines(0);
        assert!(matches!(
            layout_text(&metrics, &request),
            Err(CardError::InvalidLayoutParameters(_))
        ));
    }

    #[test]
    fn fragments_join_in_order_without_separators() {
        let metrics = FixedMetrics::new(1000.0);
        let request = LayoutRequest::new("ab", Px(10.0), Px(10.0))
            .with_max_lines(2)
            .with_colour(colours::WHITE);
        let result = layout_text(&metrics, &request).unwrap();
        assert_eq!(
            result.to_svg(),
            concat!(
                r##"<path d="M0 10L0 3Z" fill="#ffffff"/>"##,
                r##"<path d="M0 20L0 13Z" fill="#ffffff"/>"##,
            )
        );
    }

    #[test]
    fn layout_is_deterministic() {
        let metrics = FixedMetrics::new(730.0);
        let request = LayoutRequest::new("Some title, repeated", Px(200.0), Px(48.0))
            .with_align(Align::Center)
            .with_max_lines(3);
        let first = layout_text(&metrics, &request).unwrap().to_svg();
        let second = layout_text(&metrics, &request).unwrap().to_svg();
        assert_eq!(first, second);
    }
}
