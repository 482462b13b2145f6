//! LaTeX conversion for math node trees.
//!
//! A single recursive pass over the [`MathNode`] tree, appending to a string
//! buffer. Conversion is a pure function of the tree: missing child slots
//! render as documented defaults, unrecognized glyphs pass through, and the
//! generic `Row` container concatenates its children — nothing here returns
//! an error.

pub mod symbols;

use crate::formula::ast::{BarPosition, FractionStyle, GroupPosition, MathNode};
use symbols::{ACCENTS, DELIMITERS, KNOWN_FUNCTIONS, NARY_OPERATORS, UNICODE_TO_LATEX};

/// Convert a math node tree to a LaTeX string.
///
/// `None` yields the empty string. Surrounding whitespace is trimmed.
///
/// # Example
/// ```
/// use yuzu::formula::{MathNode, convert};
///
/// let node = MathNode::Fraction {
///     numerator: vec![MathNode::text("a")],
///     denominator: vec![MathNode::text("b")],
///     style: Default::default(),
/// };
/// assert_eq!(convert(Some(&node)), "\\frac{a}{b}");
/// assert_eq!(convert(None), "");
/// ```
pub fn convert(node: Option<&MathNode>) -> String {
    match node {
        Some(node) => {
            let mut buffer = String::with_capacity(128);
            write_node(node, &mut buffer);
            buffer.trim().to_string()
        },
        None => String::new(),
    }
}

/// Convert a sequence of sibling math nodes, trimmed.
pub fn convert_nodes(nodes: &[MathNode]) -> String {
    let mut buffer = String::with_capacity(128);
    write_nodes(nodes, &mut buffer);
    buffer.trim().to_string()
}

fn write_nodes(nodes: &[MathNode], out: &mut String) {
    for node in nodes {
        write_node(node, out);
    }
}

/// Render a child slot into its own string, for rules that need to inspect
/// the result before deciding what to emit.
fn render(nodes: &[MathNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_node(node: &MathNode, out: &mut String) {
    match node {
        MathNode::Text(text) => write_text(text, out),

        MathNode::Fraction {
            numerator,
            denominator,
            style,
        } => match style {
            FractionStyle::Linear => {
                write_nodes(numerator, out);
                out.push('/');
                write_nodes(denominator, out);
            },
            FractionStyle::Stacked => {
                out.push_str("\\frac{");
                write_nodes(numerator, out);
                out.push_str("}{");
                write_nodes(denominator, out);
                out.push('}');
            },
        },

        MathNode::Superscript { base, superscript } => {
            write_nodes(base, out);
            out.push_str("^{");
            write_nodes(superscript, out);
            out.push('}');
        },

        MathNode::Subscript { base, subscript } => {
            write_nodes(base, out);
            out.push_str("_{");
            write_nodes(subscript, out);
            out.push('}');
        },

        MathNode::SubSup {
            base,
            subscript,
            superscript,
        } => {
            write_nodes(base, out);
            out.push_str("_{");
            write_nodes(subscript, out);
            out.push_str("}^{");
            write_nodes(superscript, out);
            out.push('}');
        },

        MathNode::Radical {
            degree,
            degree_hidden,
            base,
        } => {
            let index = render(degree);
            let index = index.trim();
            if !degree_hidden && !index.is_empty() {
                out.push_str("\\sqrt[");
                out.push_str(index);
                out.push_str("]{");
            } else {
                out.push_str("\\sqrt{");
            }
            write_nodes(base, out);
            out.push('}');
        },

        MathNode::Nary {
            operator,
            subscript,
            superscript,
            body,
        } => {
            let command = operator
                .and_then(|glyph| NARY_OPERATORS.get(&glyph))
                .copied()
                .unwrap_or("\\sum");
            out.push_str(command);
            let lower = render(subscript);
            let lower = lower.trim();
            if !lower.is_empty() {
                out.push_str("_{");
                out.push_str(lower);
                out.push('}');
            }
            let upper = render(superscript);
            let upper = upper.trim();
            if !upper.is_empty() {
                out.push_str("^{");
                out.push_str(upper);
                out.push('}');
            }
            out.push(' ');
            write_nodes(body, out);
        },

        MathNode::Delimiter {
            open,
            close,
            separator,
            operands,
        } => {
            let open_glyph = open.as_deref().unwrap_or("(");
            let close_glyph = close.as_deref().unwrap_or(")");
            let left = DELIMITERS.get(open_glyph).copied().unwrap_or(open_glyph);
            let right = DELIMITERS.get(close_glyph).copied().unwrap_or(close_glyph);
            out.push_str("\\left");
            out.push_str(left);
            out.push(' ');
            if operands.len() > 1 {
                let sep = separator.as_deref().unwrap_or("|");
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                        out.push_str(sep);
                        out.push(' ');
                    }
                    write_nodes(operand, out);
                }
            } else if let Some(operand) = operands.first() {
                write_nodes(operand, out);
            }
            out.push(' ');
            out.push_str("\\right");
            out.push_str(right);
        },

        MathNode::Function { name, argument } => {
            let name_text = render(name);
            let name_text = name_text.trim();
            // Strip any escape marker already present before the whitelist check
            let stripped = name_text.replace('\\', "");
            let clean = stripped.trim();
            if KNOWN_FUNCTIONS.contains(clean) {
                out.push('\\');
                out.push_str(clean);
            } else {
                out.push_str(name_text);
            }
            out.push(' ');
            write_nodes(argument, out);
        },

        MathNode::Accent { character, base } => {
            let command = character
                .and_then(|glyph| ACCENTS.get(&glyph))
                .copied()
                .unwrap_or("\\hat");
            out.push_str(command);
            out.push('{');
            write_nodes(base, out);
            out.push('}');
        },

        MathNode::Bar { position, base } => {
            out.push_str(match position {
                BarPosition::Bottom => "\\underline{",
                BarPosition::Top => "\\overline{",
            });
            write_nodes(base, out);
            out.push('}');
        },

        MathNode::Matrix { rows } => {
            out.push_str("\\begin{matrix} ");
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    out.push_str(" \\\\ ");
                }
                for (j, cell) in row.iter().enumerate() {
                    if j > 0 {
                        out.push_str(" & ");
                    }
                    write_nodes(cell, out);
                }
            }
            out.push_str(" \\end{matrix}");
        },

        MathNode::EqArray { rows } => {
            out.push_str("\\begin{aligned} ");
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    out.push_str(" \\\\ ");
                }
                write_nodes(row, out);
            }
            out.push_str(" \\end{aligned}");
        },

        MathNode::LowerLimit { base, limit } => {
            write_nodes(base, out);
            out.push_str("_{");
            write_nodes(limit, out);
            out.push('}');
        },

        MathNode::UpperLimit { base, limit } => {
            write_nodes(base, out);
            out.push_str("^{");
            write_nodes(limit, out);
            out.push('}');
        },

        MathNode::GroupChar {
            character,
            position,
            base,
        } => {
            let overbrace = *character == Some('\u{23DE}') || *position == GroupPosition::Top;
            out.push_str(if overbrace {
                "\\overbrace{"
            } else {
                "\\underbrace{"
            });
            write_nodes(base, out);
            out.push('}');
        },

        MathNode::BorderBox { base } => {
            out.push_str("\\boxed{");
            write_nodes(base, out);
            out.push('}');
        },

        MathNode::Box { base } => write_nodes(base, out),

        MathNode::PreScript {
            subscript,
            superscript,
            base,
        } => {
            let lower = render(subscript);
            if !lower.is_empty() {
                out.push_str("{}_{");
                out.push_str(&lower);
                out.push('}');
            }
            let upper = render(superscript);
            if !upper.is_empty() {
                out.push_str("{}^{");
                out.push_str(&upper);
                out.push('}');
            }
            out.push(' ');
            write_nodes(base, out);
        },

        MathNode::Row(children) => write_nodes(children, out),
    }
}

/// Transliterate a text run character by character. Mapped commands that
/// start with a backslash get a separating space; superscript-digit
/// shorthands and unmapped characters do not.
fn write_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match UNICODE_TO_LATEX.get(&ch) {
            Some(command) => {
                out.push_str(command);
                if command.starts_with('\\') {
                    out.push(' ');
                }
            },
            None => out.push(ch),
        }
    }
}
