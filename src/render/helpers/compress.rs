//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress PDF streams to reduce file size.
///
/// printpdf writes its content streams uncompressed, and embedded photos
/// dominate the output size. We parse the PDF bytes with lopdf, compress
/// all streams, and re-save.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e))
    })?;

    Ok(output.into_inner())
}

/// Compress, keeping the original bytes when lopdf can't handle them
pub fn compress_or_keep(bytes: Vec<u8>) -> Vec<u8> {
    match compress_pdf(&bytes) {
        Ok(compressed) => compressed,
        Err(e) => {
            log::warn!("{}; keeping uncompressed output", e);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_kept() {
        let garbage = b"not a pdf".to_vec();
        assert!(compress_pdf(&garbage).is_err());
        assert_eq!(compress_or_keep(garbage.clone()), garbage);
    }
}
