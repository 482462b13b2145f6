//! Mathematical formula parsing and conversion.
//!
//! This module converts OMML (Office Math Markup Language), the XML math
//! format of modern Word documents, into LaTeX strings. It works in two
//! stages sharing a common tree representation:
//!
//! - **OMML mapping**: XML elements onto the [`MathNode`] tree
//! - **LaTeX conversion**: recursive rendering of the tree with static
//!   symbol tables
//!
//! # Example
//!
//! ```
//! use yuzu::formula::omml_to_latex;
//!
//! let omml = "<m:oMath><m:f>\
//!             <m:num><m:r><m:t>1</m:t></m:r></m:num>\
//!             <m:den><m:r><m:t>2</m:t></m:r></m:den>\
//!             </m:f></m:oMath>";
//! assert_eq!(omml_to_latex(omml).unwrap(), "\\frac{1}{2}");
//! ```

/// Math node tree shared by the OMML mapper and the LaTeX converter.
pub mod ast;
/// LaTeX rendering of math node trees.
pub mod latex;
/// OMML element tree to math node mapping.
pub mod omml;

// Re-export public API
pub use ast::{BarPosition, FractionStyle, GroupPosition, MathNode};
pub use latex::{convert, convert_nodes};

use crate::common::Result;
use crate::common::xml;

/// Convert an OMML fragment (`m:oMath` or `m:oMathPara`) to LaTeX.
///
/// Fails only when the XML itself is malformed; unmodeled math constructs
/// degrade to the concatenation of their children instead of erroring.
pub fn omml_to_latex(omml: &str) -> Result<String> {
    let root = xml::parse(omml)?;
    Ok(latex::convert_nodes(&omml::parse_children(&root)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omml_to_latex() {
        let omml = r#"<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>"#;
        assert_eq!(omml_to_latex(omml).unwrap(), "x");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(omml_to_latex("<m:oMath><m:r>").is_err());
    }
}
