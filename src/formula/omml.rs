//! OMML (Office Math Markup Language) element mapping.
//!
//! Maps an OMML element subtree (`m:oMath` and its descendants) onto the
//! [`MathNode`] model. Properties are read from the `m:*Pr` child of each
//! construct (`m:chr`, `m:begChr`, `m:pos`, `m:type`, `m:degHide`, each
//! carrying an `m:val` attribute). Elements with no dedicated mapping
//! degrade to a [`MathNode::Row`] of their mapped children, so no markup is
//! ever dropped outright — at worst it is mis-rendered.
//!
//! Reference: https://devblogs.microsoft.com/math-in-office/officemath/

use crate::common::xml::XmlElement;
use crate::formula::ast::{BarPosition, FractionStyle, GroupPosition, MathNode};
use log::debug;

/// Map the element children of an OMML container onto math nodes.
///
/// This is the entry point for `m:oMath` roots and for every slot element
/// (`m:e`, `m:num`, `m:den`, ...), whose children are sibling sequences.
pub fn parse_children(elem: &XmlElement) -> Vec<MathNode> {
    elem.elements().filter_map(node_from).collect()
}

/// Map a single OMML element onto a math node.
pub fn node_from(elem: &XmlElement) -> Option<MathNode> {
    let node = match elem.local_name() {
        "r" => return run_text(elem),

        "f" => MathNode::Fraction {
            numerator: slot(elem, "num"),
            denominator: slot(elem, "den"),
            style: fraction_style(elem),
        },

        "sSup" => MathNode::Superscript {
            base: slot(elem, "e"),
            superscript: slot(elem, "sup"),
        },

        "sSub" => MathNode::Subscript {
            base: slot(elem, "e"),
            subscript: slot(elem, "sub"),
        },

        "sSubSup" => MathNode::SubSup {
            base: slot(elem, "e"),
            subscript: slot(elem, "sub"),
            superscript: slot(elem, "sup"),
        },

        "rad" => MathNode::Radical {
            degree: slot(elem, "deg"),
            degree_hidden: property_val(elem, "radPr", "degHide") == Some("1"),
            base: slot(elem, "e"),
        },

        "nary" => MathNode::Nary {
            operator: property_val(elem, "naryPr", "chr").and_then(|v| v.chars().next()),
            subscript: slot(elem, "sub"),
            superscript: slot(elem, "sup"),
            body: slot(elem, "e"),
        },

        "d" => MathNode::Delimiter {
            open: delimiter_glyph(elem, "begChr", "("),
            close: delimiter_glyph(elem, "endChr", ")"),
            separator: delimiter_glyph(elem, "sepChr", "|"),
            operands: elem.children_named("e").map(parse_children).collect(),
        },

        "func" => MathNode::Function {
            name: slot(elem, "fName"),
            argument: slot(elem, "e"),
        },

        "acc" => MathNode::Accent {
            character: property_val(elem, "accPr", "chr").and_then(|v| v.chars().next()),
            base: slot(elem, "e"),
        },

        "bar" => MathNode::Bar {
            position: if property_val(elem, "barPr", "pos") == Some("bot") {
                BarPosition::Bottom
            } else {
                BarPosition::Top
            },
            base: slot(elem, "e"),
        },

        "m" => MathNode::Matrix {
            rows: elem
                .children_named("mr")
                .map(|row| row.children_named("e").map(parse_children).collect())
                .collect(),
        },

        "eqArr" => MathNode::EqArray {
            rows: elem.children_named("e").map(parse_children).collect(),
        },

        "limLow" => MathNode::LowerLimit {
            base: slot(elem, "e"),
            limit: slot(elem, "lim"),
        },

        "limUpp" => MathNode::UpperLimit {
            base: slot(elem, "e"),
            limit: slot(elem, "lim"),
        },

        "groupChr" => MathNode::GroupChar {
            character: property_val(elem, "groupChrPr", "chr").and_then(|v| v.chars().next()),
            position: if property_val(elem, "groupChrPr", "pos") == Some("top") {
                GroupPosition::Top
            } else {
                GroupPosition::Bottom
            },
            base: slot(elem, "e"),
        },

        "borderBox" => MathNode::BorderBox {
            base: slot(elem, "e"),
        },

        "box" => MathNode::Box {
            base: slot(elem, "e"),
        },

        "sPre" => MathNode::PreScript {
            subscript: slot(elem, "sub"),
            superscript: slot(elem, "sup"),
            base: slot(elem, "e"),
        },

        // Math roots are plain sequences of their children
        "oMath" | "oMathPara" => MathNode::Row(parse_children(elem)),

        other => {
            // Property containers routinely land here and contribute nothing;
            // anything else is markup we don't model yet
            if !other.ends_with("Pr") {
                debug!("no handler for OMML element <{}>, concatenating children", elem.name);
            }
            MathNode::Row(parse_children(elem))
        },
    };
    Some(node)
}

/// Text content of a math run: the first `m:t` (or `w:t`) child.
fn run_text(elem: &XmlElement) -> Option<MathNode> {
    elem.child("t").map(|t| MathNode::Text(t.text()))
}

/// Mapped children of a named slot child; empty when the slot is absent.
fn slot(elem: &XmlElement, name: &str) -> Vec<MathNode> {
    elem.child(name).map(parse_children).unwrap_or_default()
}

/// The `m:val` attribute of `elem/<properties>/<name>`.
fn property_val<'a>(elem: &'a XmlElement, properties: &str, name: &str) -> Option<&'a str> {
    elem.child(properties)?.child(name)?.attribute("val")
}

/// A delimiter glyph from `m:dPr`: `None` when the glyph element is absent
/// (the converter applies its default), the `m:val` value otherwise — which
/// may be the empty string, meaning an invisible delimiter.
fn delimiter_glyph(elem: &XmlElement, name: &str, default: &str) -> Option<String> {
    let glyph = elem.child("dPr")?.child(name)?;
    Some(glyph.attribute("val").unwrap_or(default).to_string())
}

fn fraction_style(elem: &XmlElement) -> FractionStyle {
    if property_val(elem, "fPr", "type") == Some("lin") {
        FractionStyle::Linear
    } else {
        FractionStyle::Stacked
    }
}
