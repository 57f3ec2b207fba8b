use crate::error::CardError;
use crate::metrics::FontMetrics;
use crate::units::Px;

/// A contiguous run of the input text that occupies one row
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
}

impl Line {
    pub fn new<S: Into<String>>(text: S) -> Line {
        Line { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Measure the advance width of one line, rejecting nonsense from the font
pub fn measure_line<M: FontMetrics + ?Sized>(
    line: &str,
    font_size: Px,
    metrics: &M,
) -> Result<Px, CardError> {
    let width = metrics.advance_width(line, font_size)?;
    if !width.is_finite() || width < Px(0.0) {
        return Err(CardError::FontProvider(format!(
            "invalid advance width {width} for {line:?}"
        )));
    }
    Ok(width)
}

/// Splits text into lines that fit within `max_width`, character by character.
///
/// Each character is tentatively appended to the current line and the whole
/// line is re-measured, so kerning between neighbours is accounted for. If the
/// line no longer fits, it is closed and the character starts the next line.
/// A character that doesn't fit even on its own still gets a line to itself;
/// characters are never split. Words are not kept together: with room for six
/// characters, "asdf asdf" becomes "asdf a" and "sdf".
///
/// Every character of `text` lands in exactly one line, in order, and empty
/// text yields a single empty line.
///
/// Re-measuring the growing line makes this quadratic in the line length,
/// which is fine for titles but not for paragraphs.
pub fn segment_lines<M: FontMetrics + ?Sized>(
    text: &str,
    font_size: Px,
    max_width: Px,
    metrics: &M,
) -> Result<Vec<Line>, CardError> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        let was_empty = current.is_empty();
        current.push(ch);

        let width = measure_line(&current, font_size, metrics)?;
        if width > max_width && !was_empty {
            current.pop();
            lines.push(Line::new(std::mem::take(&mut current)));
            current.push(ch);
        }
    }
    lines.push(Line::new(current));

    Ok(lines)
}
