//! Yuzu - extract text, LaTeX math, and numbered questions from Word exam documents
//!
//! Math-heavy Word documents store their formulas as OMML (Office Math
//! Markup Language), which plain text extraction silently drops. This
//! library parses the main document part of such a document, converts every
//! math region to LaTeX, linearizes paragraphs and tables into one
//! annotated text stream, and segments that stream into numbered question
//! records.
//!
//! The binary container (`.docx` ZIP archive) is out of scope: callers
//! hand over the already-unpacked `word/document.xml` content, either as a
//! string or as a file path.
//!
//! # Example - Extracting a document
//!
//! ```
//! use yuzu::Document;
//!
//! let xml = "<w:document><w:body>\
//!            <w:p><w:r><w:t>1. Evaluate </w:t></w:r>\
//!            <m:oMath><m:f>\
//!            <m:num><m:r><m:t>1</m:t></m:r></m:num>\
//!            <m:den><m:r><m:t>2</m:t></m:r></m:den>\
//!            </m:f></m:oMath></w:p>\
//!            </w:body></w:document>";
//!
//! let doc = Document::from_xml(xml)?;
//! assert_eq!(doc.text(), "1. Evaluate  $\\frac{1}{2}$");
//! # Ok::<(), yuzu::Error>(())
//! ```
//!
//! # Example - Segmenting questions
//!
//! ```
//! use yuzu::segment_questions;
//!
//! let text = "문제 1 평균을 구하시오\n...\n문제 2 분산을 구하시오\n...";
//! let questions = segment_questions(text);
//! assert_eq!(questions.len(), 2);
//! assert_eq!(questions[0].number, 1);
//! ```
//!
//! # Example - Converting a single formula
//!
//! ```
//! use yuzu::formula::omml_to_latex;
//!
//! let latex = omml_to_latex("<m:oMath><m:r><m:t>α+β</m:t></m:r></m:oMath>")?;
//! assert_eq!(latex, "\\alpha +\\beta");
//! # Ok::<(), yuzu::Error>(())
//! ```

/// Common types and utilities shared across the crate.
pub mod common;
/// Word document model, parsing, and text extraction.
pub mod document;
/// Mathematical formula parsing and LaTeX conversion.
pub mod formula;
/// Question segmentation over extracted text.
pub mod question;

// Re-export public API
pub use common::{Error, Result};
pub use document::{Block, Document, Inline, Paragraph, Table, TableCell, TableRow};
pub use formula::{MathNode, omml_to_latex};
pub use question::{Question, segment as segment_questions};

use log::debug;
use std::path::Path;

/// Extract the annotated text of a document part stored on disk.
///
/// The file must contain the main document part XML (`word/document.xml` of
/// an unpacked `.docx`). Fails with [`Error::InputNotFound`] when the path
/// does not exist and [`Error::UnsupportedFormat`] when the content is not
/// a WordprocessingML document.
///
/// # Example
///
/// ```no_run
/// let text = yuzu::extract_file("exam/word/document.xml")?;
/// for question in yuzu::segment_questions(&text) {
///     println!("question {}: {}", question.number, question.title);
/// }
/// # Ok::<(), yuzu::Error>(())
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.display().to_string()));
    }
    debug!("reading document part from {}", path.display());
    let xml = std::fs::read_to_string(path)?;
    let doc = Document::from_xml(&xml)?;
    Ok(doc.text())
}
