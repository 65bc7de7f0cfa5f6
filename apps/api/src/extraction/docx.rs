use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Joins the text of every top-level body paragraph with `'\n'`, in document order.
/// Empty paragraphs are kept as empty lines; tables and images are skipped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to parse DOCX: {e:?}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Runs are concatenated with no separator; hyperlink runs count as paragraph text.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        push_child_text(child, &mut text);
    }
    text
}

fn push_child_text(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => out.push_str(&t.text),
                    RunChild::Tab(_) => out.push('\t'),
                    RunChild::Break(_) => out.push('\n'),
                    _ => {}
                }
            }
        }
        ParagraphChild::Hyperlink(link) => {
            for inner in &link.children {
                push_child_text(inner, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    /// Builds an in-memory .docx with one paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            let mut paragraph = Paragraph::new();
            if !text.is_empty() {
                paragraph = paragraph.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(paragraph);
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let bytes = build_docx(&["Jane Doe", "Senior Rust Engineer", "Skills: SQL, AWS"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSenior Rust Engineer\nSkills: SQL, AWS");
    }

    #[test]
    fn test_empty_paragraph_becomes_empty_line() {
        let bytes = build_docx(&["Summary", "", "Experience"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Summary\n\nExperience");
    }

    #[test]
    fn test_runs_concatenate_without_separator() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Postgre"))
                .add_run(Run::new().add_text("SQL")),
        );
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();

        let text = extract_docx_text(&buf.into_inner()).unwrap();
        assert_eq!(text, "PostgreSQL");
    }

    #[test]
    fn test_invalid_zip_is_an_extraction_error() {
        let result = extract_docx_text(b"PK-but-not-really-a-zip");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
