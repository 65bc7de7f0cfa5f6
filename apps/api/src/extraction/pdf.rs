use std::panic;

use tracing::warn;

use crate::errors::AppError;

/// Extracts the text of every page in order and concatenates it with no separator.
/// Pages without extractable text (scans, image-only pages) contribute nothing.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    extract_pdf_pages(bytes).map(join_pages)
}

/// Per-page text in page order; a page with no text is an empty string.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    // pdf-extract can panic on some fonts
    let extraction_result =
        panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

    match extraction_result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(AppError::Extraction(format!(
            "Failed to extract text from PDF: {e}"
        ))),
        Err(_) => {
            warn!("pdf-extract panicked while parsing upload");
            Err(AppError::Extraction(
                "Failed to extract text from PDF: unsupported font or structure".to_string(),
            ))
        }
    }
}

fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}
