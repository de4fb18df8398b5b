//! Document text extraction — PDF and DOCX containers.
//!
//! Container-level parse failures degrade to empty text; the pipeline then
//! rejects the document as empty or image-based. Only an unsupported file
//! extension is an immediate error.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::{info, warn};

use crate::errors::AppError;

/// Extracts plain text from an uploaded document, dispatching on the
/// file extension. Returns an empty string when the container cannot be
/// parsed or holds no text.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        Ok(extract_pdf_text(data))
    } else if lower.ends_with(".docx") {
        Ok(extract_docx_text(data))
    } else {
        Err(AppError::Validation(
            "Invalid file type. Please upload a .pdf or .docx file.".to_string(),
        ))
    }
}

fn extract_pdf_text(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => {
            info!("PDF text extracted successfully.");
            text
        }
        Err(e) => {
            warn!("Error reading PDF: {e}");
            String::new()
        }
    }
}

fn extract_docx_text(data: &[u8]) -> String {
    let package = match read_docx(data) {
        Ok(package) => package,
        Err(e) => {
            warn!("Error reading DOCX: {e}");
            return String::new();
        }
    };

    let mut paragraphs = Vec::new();
    for child in &package.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(paragraph);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    info!("DOCX text extracted successfully.");
    paragraphs.join("\n")
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => buffer.push_str(&t.text),
                    RunChild::Tab(_) => buffer.push(' '),
                    RunChild::Break(_) => buffer.push('\n'),
                    _ => {}
                }
            }
        }
    }
    buffer
}
