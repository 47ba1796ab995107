//! PNG output for rendered avatars.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{AcidError, Result};

use super::RenderedAvatar;

/// Copy a rendered avatar into an image buffer.
fn to_image(rendered: &RenderedAvatar) -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(rendered.width() as u32, rendered.height() as u32);

    for (y, row) in rendered.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }

    img
}

/// Write a rendered avatar to a PNG file.
pub fn write_png(rendered: &RenderedAvatar, path: &Path) -> Result<()> {
    to_image(rendered).save(path).map_err(|e| AcidError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Encode a rendered avatar as PNG bytes.
pub fn encode_png(rendered: &RenderedAvatar) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    to_image(rendered)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AcidError::Render {
            message: format!("Failed to encode PNG for {}: {}", rendered.name, e),
            help: None,
        })?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RasterRenderer, RenderOptions};
    use crate::types::{generate_pattern, Colour};
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let pixels = vec![
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::WHITE, Colour::BLACK],
        ];
        let rendered = RenderedAvatar::new("test", pixels);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&rendered, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_with_transparency() {
        let pixels = vec![vec![Colour::TRANSPARENT, Colour::new(255, 0, 0, 128)]];
        let rendered = RenderedAvatar::new("test", pixels);

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&rendered, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_generated_avatar() {
        let pattern = generate_pattern("alice-1700000000000");
        let rendered = RasterRenderer::new(RenderOptions::default()).render("alice", &pattern);

        let dir = tempdir().unwrap();
        let path = dir.path().join("alice.png");

        write_png(&rendered, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        assert_eq!(img.into_raw(), rendered.to_rgba_buffer());
    }

    #[test]
    fn test_encode_png_signature() {
        let rendered = RenderedAvatar::new("dot", vec![vec![Colour::BLACK]]);
        let bytes = encode_png(&rendered).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_bad_path() {
        let rendered = RenderedAvatar::new("dot", vec![vec![Colour::BLACK]]);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("dot.png");

        assert!(write_png(&rendered, &path).is_err());
    }
}
