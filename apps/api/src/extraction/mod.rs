//! Text extraction — turns an uploaded resume file into plain text.
//!
//! Format dispatch is by file name suffix: `.pdf` and `.docx` are parsed,
//! anything else yields empty text plus a user-facing warning rather than an error.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Only PDF and DOCX formats are supported.";

/// Declared format of an uploaded document, derived from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Suffix match on the raw file name, case-sensitive.
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if file_name.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Unsupported
        }
    }
}

/// An uploaded file, scoped to a single request.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

impl Document {
    pub fn from_upload(file_name: impl Into<String>, bytes: Bytes) -> Self {
        let file_name = file_name.into();
        let format = DocumentFormat::from_file_name(&file_name);
        Document {
            file_name,
            format,
            bytes,
        }
    }
}

/// Extracted text plus an optional warning to surface to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub warning: Option<String>,
}

/// Extracts plain text from a document.
///
/// Unsupported formats are not an error: the result is empty text with a warning,
/// and scoring proceeds on it. Corrupt PDF/DOCX payloads return `AppError::Extraction`.
pub fn extract(document: &Document) -> Result<Extraction, AppError> {
    let text = match document.format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&document.bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(&document.bytes)?,
        DocumentFormat::Unsupported => {
            warn!("Rejected unsupported resume format: {}", document.file_name);
            return Ok(Extraction {
                text: String::new(),
                warning: Some(UNSUPPORTED_FORMAT_MESSAGE.to_string()),
            });
        }
    };

    debug!(
        "Extracted {} chars from {} ({:?})",
        text.len(),
        document.file_name,
        document.format
    );

    Ok(Extraction {
        text,
        warning: None,
    })
}
