//! Converting finished SVG documents into PNG images.

use crate::CardError;
use resvg::tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

/// Parse an SVG document and render it at its natural size, returning the
/// encoded PNG. Malformed documents are reported as [CardError::Svg].
pub fn rasterize(svg: &str) -> Result<Vec<u8>, CardError> {
    let options = Options::default();
    let tree = Tree::from_str(svg, &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        CardError::Render(format!(
            "can't allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| CardError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn renders_at_document_size() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
            <rect fill="#ff0000" width="100%" height="100%"/>
        </svg>"##;
        let png = rasterize(svg).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));

        let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(image.dimensions(), (20, 10));
        assert_eq!(image.get_pixel(5, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(matches!(
            rasterize("<svg this is not xml"),
            Err(CardError::Svg(_))
        ));
        assert!(rasterize("").is_err());
    }
}
