//! Word document model and text extraction.
//!
//! An owned, ordered model of the document body: paragraphs and tables, in
//! document order, with math regions already mapped onto [`MathNode`] trees.
//! [`Document::text`] linearizes the model into a single annotated string —
//! plain text with inline math in `$...$`, display math in `$$...$$`, and
//! tables as pipe-delimited rows.
//!
//! # Example
//!
//! ```
//! use yuzu::Document;
//!
//! let xml = "<w:document><w:body>\
//!            <w:p><w:r><w:t>Compute </w:t></w:r>\
//!            <m:oMath><m:r><m:t>x+1</m:t></m:r></m:oMath></w:p>\
//!            </w:body></w:document>";
//! let doc = Document::from_xml(xml)?;
//! assert_eq!(doc.text(), "Compute  $x+1$");
//! # Ok::<(), yuzu::Error>(())
//! ```

pub mod parse;
pub mod text;

use crate::common::Result;
use crate::formula::MathNode;

/// A parsed Word document body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Parse the main document part (WordprocessingML XML).
    ///
    /// Fails with [`crate::Error::UnsupportedFormat`] when the root element
    /// is not `w:document`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        parse::document_from_xml(xml)
    }

    /// Linearize the document into annotated text.
    ///
    /// Pure function of the model: calling it twice yields byte-identical
    /// output.
    pub fn text(&self) -> String {
        text::document_text(self)
    }
}

/// A top-level block of the document body.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A paragraph: an ordered sequence of inline items.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub items: Vec<Inline>,
}

/// An inline item within a paragraph.
#[derive(Debug, Clone)]
pub enum Inline {
    /// Literal run text
    Run(String),
    /// Explicit line break
    Break,
    /// Tab stop
    Tab,
    /// Inline math region (`m:oMath`)
    Math(Vec<MathNode>),
    /// Display math region (`m:oMathPara`); one entry per contained equation
    MathBlock(Vec<Vec<MathNode>>),
}

/// A table: rows of cells, each cell holding nested paragraphs.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

/// A table row.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::segment;

    #[test]
    fn test_full_pipeline_from_xml_to_questions() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>문제 1 다음을 계산하시오</w:t></w:r></w:p>\
                   <w:p><m:oMathPara><m:oMath><m:nary>\
                   <m:naryPr><m:chr m:val=\"∑\"/></m:naryPr>\
                   <m:sub><m:r><m:t>i=1</m:t></m:r></m:sub>\
                   <m:sup><m:r><m:t>n</m:t></m:r></m:sup>\
                   <m:e><m:r><m:t>i</m:t></m:r></m:e>\
                   </m:nary></m:oMath></m:oMathPara></w:p>\
                   <w:p><w:r><w:t>문제 2 표를 보고 답하시오</w:t></w:r></w:p>\
                   <w:tbl>\
                   <w:tr><w:tc><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc>\
                   <w:tc><w:p><w:r><w:t>y</w:t></w:r></w:p></w:tc></w:tr>\
                   <w:tr><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc>\
                   <w:tc><w:p><w:r><w:t>2</w:t></w:r></w:p></w:tc></w:tr>\
                   </w:tbl>\
                   </w:body></w:document>";

        let doc = Document::from_xml(xml).unwrap();
        let text = doc.text();
        assert_eq!(
            text,
            "문제 1 다음을 계산하시오\n\n\
             $$\\sum_{i=1}^{n} i$$\n\n\
             문제 2 표를 보고 답하시오\n\n\
             | x | y |\n| --- | --- |\n| 1 | 2 |"
        );

        let questions = segment(&text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].number, 1);
        assert!(questions[0].body.contains("$$\\sum_{i=1}^{n} i$$"));
        assert_eq!(questions[1].number, 2);
        assert!(questions[1].body.contains("| x | y |"));
    }

    #[test]
    fn test_extract_is_idempotent_over_parsed_document() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>once</w:t></w:r></w:p>\
                   <w:p><m:oMath><m:r><m:t>x</m:t></m:r></m:oMath></w:p>\
                   </w:body></w:document>";
        let doc = Document::from_xml(xml).unwrap();
        assert_eq!(doc.text(), doc.text());
    }
}
