//! Stream compression for finished documents
//!
//! printpdf writes uncompressed content streams; card sheets repeat the same
//! shapes hundreds of times, so a deflate pass through lopdf shrinks them a lot.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress every stream of a serialized PDF
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

/// Compress when possible, otherwise keep the original bytes
pub fn compress_or_keep(bytes: Vec<u8>) -> Vec<u8> {
    match compress_pdf(&bytes) {
        Ok(compressed) => {
            log::debug!(
                "Compressed PDF from {} to {} bytes",
                bytes.len(),
                compressed.len()
            );
            compressed
        }
        Err(e) => {
            log::warn!("{}; writing uncompressed output", e);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_kept() {
        let garbage = b"not a pdf".to_vec();
        assert!(compress_pdf(&garbage).is_err());
        assert_eq!(compress_or_keep(garbage.clone()), garbage);
    }
}
