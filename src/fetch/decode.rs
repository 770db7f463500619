//! Decoding fetched bytes into RGB pixels for embedding

use ::image::{DynamicImage, GenericImageView, Rgba};
use printpdf::{RawImage, RawImageData, RawImageFormat};

use crate::error::ImageError;

/// Longest edge, in pixels, of an embedded photo
pub const MAX_EMBED_EDGE: u32 = 1600;

/// An opaque 8-bit RGB image
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples
    pub pixels: Vec<u8>,
}

/// Decode any format the `image` crate understands. Transparency is
/// flattened onto white and large photos are scaled down to
/// `MAX_EMBED_EDGE`.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    let image =
        ::image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
    let image = limit_size(image);

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty);
    }

    let rgba = image.to_rgba8();
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in rgba.pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let bg = 255.0; // White background
        pixels.push((r as f32 * alpha + bg * (1.0 - alpha)) as u8);
        pixels.push((g as f32 * alpha + bg * (1.0 - alpha)) as u8);
        pixels.push((b as f32 * alpha + bg * (1.0 - alpha)) as u8);
    }

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}

fn limit_size(image: DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width.max(height) > MAX_EMBED_EDGE {
        image.thumbnail(MAX_EMBED_EDGE, MAX_EMBED_EDGE)
    } else {
        image
    }
}

impl DecodedImage {
    /// Wrap the pixels for `PdfDocument::add_image`
    pub fn into_raw_image(self) -> RawImage {
        RawImage {
            pixels: RawImageData::U8(self.pixels),
            width: self.width as usize,
            height: self.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        }
    }
}
