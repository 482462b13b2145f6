//! WordprocessingML body parsing.
//!
//! Walks the element tree of the main document part and builds the owned
//! document model. Only content elements are mapped: `w:p` paragraphs with
//! their `w:r` runs (`w:t` text, `w:br` breaks, `w:tab` tabs), embedded
//! `m:oMath`/`m:oMathPara` regions, and `w:tbl` tables. Everything else
//! (section properties, bookmarks, paragraph properties) is skipped.

use crate::common::xml::{self, XmlElement};
use crate::common::{Error, Result};
use crate::document::{Block, Document, Inline, Paragraph, Table, TableCell, TableRow};
use crate::formula::omml;
use log::debug;

/// Parse the main document part into a [`Document`].
pub fn document_from_xml(source: &str) -> Result<Document> {
    let root = xml::parse(source)?;
    if root.local_name() != "document" {
        return Err(Error::UnsupportedFormat {
            expected: "w:document".to_string(),
            got: root.name.clone(),
        });
    }

    let blocks = match root.child("body") {
        Some(body) => parse_body(body),
        None => Vec::new(),
    };
    debug!("parsed document body with {} blocks", blocks.len());
    Ok(Document { blocks })
}

fn parse_body(body: &XmlElement) -> Vec<Block> {
    body.elements()
        .filter_map(|elem| match elem.local_name() {
            "p" => Some(Block::Paragraph(parse_paragraph(elem))),
            "tbl" => Some(Block::Table(parse_table(elem))),
            _ => None, // sectPr and friends
        })
        .collect()
}

fn parse_paragraph(paragraph: &XmlElement) -> Paragraph {
    let mut items = Vec::new();
    for child in paragraph.elements() {
        match child.local_name() {
            // At paragraph level a run can only be w:r; m:r occurs inside oMath
            "r" => collect_run_items(child, &mut items),
            "oMath" => items.push(Inline::Math(omml::parse_children(child))),
            "oMathPara" => {
                let mut equations = Vec::new();
                collect_math_roots(child, &mut equations);
                items.push(Inline::MathBlock(equations));
            },
            _ => {}, // pPr, bookmarks, ...
        }
    }
    Paragraph { items }
}

fn collect_run_items(run: &XmlElement, items: &mut Vec<Inline>) {
    for child in run.elements() {
        match child.local_name() {
            "t" => items.push(Inline::Run(child.text())),
            "br" => items.push(Inline::Break),
            "tab" => items.push(Inline::Tab),
            _ => {}, // rPr and friends
        }
    }
}

/// Collect every `m:oMath` descendant in document order; a display region
/// may carry several equations.
fn collect_math_roots(elem: &XmlElement, out: &mut Vec<Vec<crate::formula::MathNode>>) {
    for child in elem.elements() {
        if child.local_name() == "oMath" {
            out.push(omml::parse_children(child));
        } else {
            collect_math_roots(child, out);
        }
    }
}

fn parse_table(table: &XmlElement) -> Table {
    let rows = table
        .children_named("tr")
        .map(|row| TableRow {
            cells: row
                .children_named("tc")
                .map(|cell| TableCell {
                    paragraphs: cell.children_named("p").map(parse_paragraph).collect(),
                })
                .collect(),
        })
        .collect();
    Table { rows }
}
