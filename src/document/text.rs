//! Document linearization.
//!
//! Renders the document model into one annotated text stream: literal run
//! text, inline math wrapped in ` $...$ `, display math on its own
//! `$$...$$` lines, and tables as pipe-delimited rows with a separator row
//! after the header. Blank-line runs are collapsed so no more than one
//! empty line survives between blocks.

use crate::document::{Block, Document, Inline, Paragraph, Table};
use crate::formula::latex::convert_nodes;
use memchr::memmem;

/// Linearize a document into annotated text.
pub fn document_text(doc: &Document) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(doc.blocks.len());
    for block in &doc.blocks {
        match block {
            Block::Paragraph(paragraph) => parts.push(paragraph_text(paragraph)),
            Block::Table(table) => {
                let rendered = table_text(table);
                if !rendered.is_empty() {
                    parts.push(format!("\n{}\n", rendered));
                }
            },
        }
    }
    let joined = parts.join("\n");
    collapse_blank_lines(&joined).trim().to_string()
}

/// Render one paragraph: runs verbatim, breaks and tabs as control
/// characters, math regions converted and wrapped in dollar delimiters.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    for item in &paragraph.items {
        match item {
            Inline::Run(text) => out.push_str(text),
            Inline::Break => out.push('\n'),
            Inline::Tab => out.push('\t'),
            Inline::Math(nodes) => {
                let latex = convert_nodes(nodes);
                if !latex.is_empty() {
                    out.push_str(" $");
                    out.push_str(&latex);
                    out.push_str("$ ");
                }
            },
            Inline::MathBlock(equations) => {
                for equation in equations {
                    let latex = convert_nodes(equation);
                    if !latex.is_empty() {
                        out.push_str("\n$$");
                        out.push_str(&latex);
                        out.push_str("$$\n");
                    }
                }
            },
        }
    }
    out
}

/// Render a table as pipe-delimited rows. The first row with cells becomes
/// the header, followed by a `---` separator row; data rows are padded with
/// empty cells or truncated to the header's column count.
fn table_text(table: &Table) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter_map(|row| {
            if row.cells.is_empty() {
                return None;
            }
            Some(row.cells.iter().map(cell_text).collect())
        })
        .collect();

    let Some(header) = rows.first() else {
        return String::new();
    };
    let columns = header.len();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(header));
    lines.push(format_row(&vec!["---".to_string(); columns]));
    for row in &rows[1..] {
        let mut cells = row.clone();
        cells.resize(columns, String::new());
        lines.push(format_row(&cells));
    }
    lines.join("\n")
}

/// A cell's text: its non-empty paragraph renderings joined by a space.
fn cell_text(cell: &super::TableCell) -> String {
    let parts: Vec<String> = cell
        .paragraphs
        .iter()
        .map(|paragraph| paragraph_text(paragraph).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    parts.join(" ")
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Collapse every run of three or more newlines down to exactly two.
fn collapse_blank_lines(text: &str) -> String {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(b"\n\n\n");
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(pos) = finder.find(&bytes[i..]) {
        let run_start = i + pos;
        out.push_str(&text[i..run_start + 2]);
        let mut j = run_start + 2;
        while j < bytes.len() && bytes[j] == b'\n' {
            j += 1;
        }
        i = j;
    }
    out.push_str(&text[i..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{TableCell, TableRow};
    use crate::formula::MathNode;

    fn run_paragraph(text: &str) -> Paragraph {
        Paragraph {
            items: vec![Inline::Run(text.to_string())],
        }
    }

    fn cell(text: &str) -> TableCell {
        TableCell {
            paragraphs: vec![run_paragraph(text)],
        }
    }

    #[test]
    fn test_runs_breaks_and_tabs() {
        let paragraph = Paragraph {
            items: vec![
                Inline::Run("a".to_string()),
                Inline::Break,
                Inline::Run("b".to_string()),
                Inline::Tab,
                Inline::Run("c".to_string()),
            ],
        };
        assert_eq!(paragraph_text(&paragraph), "a\nb\tc");
    }

    #[test]
    fn test_inline_math_wrapped_in_single_dollars() {
        let paragraph = Paragraph {
            items: vec![
                Inline::Run("let".to_string()),
                Inline::Math(vec![MathNode::text("x+1")]),
            ],
        };
        assert_eq!(paragraph_text(&paragraph), "let $x+1$ ");
    }

    #[test]
    fn test_display_math_on_its_own_lines() {
        let paragraph = Paragraph {
            items: vec![Inline::MathBlock(vec![
                vec![MathNode::text("x=1")],
                vec![MathNode::text("y=2")],
            ])],
        };
        assert_eq!(paragraph_text(&paragraph), "\n$$x=1$$\n\n$$y=2$$\n");
    }

    #[test]
    fn test_empty_math_region_contributes_nothing() {
        let paragraph = Paragraph {
            items: vec![Inline::Math(Vec::new())],
        };
        assert_eq!(paragraph_text(&paragraph), "");
    }

    #[test]
    fn test_table_short_row_padded() {
        let table = Table {
            rows: vec![
                TableRow {
                    cells: vec![cell("h1"), cell("h2"), cell("h3")],
                },
                TableRow {
                    cells: vec![cell("a")],
                },
            ],
        };
        assert_eq!(
            table_text(&table),
            "| h1 | h2 | h3 |\n| --- | --- | --- |\n| a |  |  |"
        );
    }

    #[test]
    fn test_table_long_row_truncated() {
        let table = Table {
            rows: vec![
                TableRow {
                    cells: vec![cell("h1"), cell("h2")],
                },
                TableRow {
                    cells: vec![cell("a"), cell("b"), cell("c")],
                },
            ],
        };
        assert_eq!(
            table_text(&table),
            "| h1 | h2 |\n| --- | --- |\n| a | b |"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(table_text(&Table::default()), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_document_text_collapses_and_trims() {
        let doc = Document {
            blocks: vec![
                Block::Paragraph(run_paragraph("first")),
                Block::Paragraph(Paragraph::default()),
                Block::Paragraph(Paragraph::default()),
                Block::Paragraph(Paragraph::default()),
                Block::Paragraph(run_paragraph("last")),
            ],
        };
        assert_eq!(doc.text(), "first\n\nlast");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = Document {
            blocks: vec![
                Block::Paragraph(run_paragraph("alpha")),
                Block::Table(Table {
                    rows: vec![TableRow {
                        cells: vec![cell("h"), cell("v")],
                    }],
                }),
            ],
        };
        assert_eq!(doc.text(), doc.text());
    }

    mod properties {
        use super::super::collapse_blank_lines;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn collapse_leaves_no_blank_line_runs(text in "[ab\\n]{0,64}") {
                let collapsed = collapse_blank_lines(&text);
                prop_assert!(!collapsed.contains("\n\n\n"));
            }

            #[test]
            fn collapse_preserves_non_newline_content(text in "[ab\\n]{0,64}") {
                let collapsed = collapse_blank_lines(&text);
                let stripped: String = text.chars().filter(|c| *c != '\n').collect();
                let collapsed_stripped: String =
                    collapsed.chars().filter(|c| *c != '\n').collect();
                prop_assert_eq!(stripped, collapsed_stripped);
            }
        }
    }
}
