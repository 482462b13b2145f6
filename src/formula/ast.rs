//! Math node definitions.
//!
//! The formula tree is a closed-set tagged union: one variant per supported
//! math construct, each owning its child subtrees directly. Child slots are
//! `Vec<MathNode>` — an empty vector means the slot is absent, and every
//! conversion rule renders a documented default for it instead of failing.
//! Trees are built once per math region by the OMML mapper, consumed once by
//! the LaTeX converter, and discarded.

/// Math node representing a single element in the formula tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MathNode {
    /// Plain text run; characters are transliterated during conversion
    Text(String),

    /// Fraction: numerator over denominator, or numerator/denominator inline
    Fraction {
        numerator: Vec<MathNode>,
        denominator: Vec<MathNode>,
        style: FractionStyle,
    },

    /// Superscript: base^{sup}
    Superscript {
        base: Vec<MathNode>,
        superscript: Vec<MathNode>,
    },

    /// Subscript: base_{sub}
    Subscript {
        base: Vec<MathNode>,
        subscript: Vec<MathNode>,
    },

    /// Combined subscript and superscript: base_{sub}^{sup}
    SubSup {
        base: Vec<MathNode>,
        subscript: Vec<MathNode>,
        superscript: Vec<MathNode>,
    },

    /// Square root or nth root
    Radical {
        degree: Vec<MathNode>,
        /// The degree slot is present but explicitly hidden (`m:degHide`)
        degree_hidden: bool,
        base: Vec<MathNode>,
    },

    /// N-ary operator (sum, product, integral) with optional limits
    Nary {
        /// Operator glyph; `None` falls back to summation
        operator: Option<char>,
        subscript: Vec<MathNode>,
        superscript: Vec<MathNode>,
        body: Vec<MathNode>,
    },

    /// Delimiter group: one or more operands wrapped in bracket glyphs
    Delimiter {
        /// Opening glyph; `None` falls back to `(`
        open: Option<String>,
        /// Closing glyph; `None` falls back to `)`
        close: Option<String>,
        /// Separator between operands; `None` falls back to `|`
        separator: Option<String>,
        operands: Vec<Vec<MathNode>>,
    },

    /// Named function applied to an argument
    Function {
        name: Vec<MathNode>,
        argument: Vec<MathNode>,
    },

    /// Accent over a base (hat, tilde, vector arrow, ...)
    Accent {
        /// Accent glyph; `None` falls back to hat
        character: Option<char>,
        base: Vec<MathNode>,
    },

    /// Overline or underline
    Bar {
        position: BarPosition,
        base: Vec<MathNode>,
    },

    /// Matrix: rows of cells
    Matrix { rows: Vec<Vec<Vec<MathNode>>> },

    /// Equation array (aligned equations)
    EqArray { rows: Vec<Vec<MathNode>> },

    /// Lower limit: base_{limit}
    LowerLimit {
        base: Vec<MathNode>,
        limit: Vec<MathNode>,
    },

    /// Upper limit: base^{limit}
    UpperLimit {
        base: Vec<MathNode>,
        limit: Vec<MathNode>,
    },

    /// Group character (overbrace/underbrace)
    GroupChar {
        /// Group glyph; `None` falls back to underbrace
        character: Option<char>,
        position: GroupPosition,
        base: Vec<MathNode>,
    },

    /// Bordered box around its content
    BorderBox { base: Vec<MathNode> },

    /// Plain box; purely presentational, content passes through
    Box { base: Vec<MathNode> },

    /// Prescripts: sub/sup rendered before the base
    PreScript {
        subscript: Vec<MathNode>,
        superscript: Vec<MathNode>,
        base: Vec<MathNode>,
    },

    /// Generic sequence container. Used for math roots and for any markup
    /// with no dedicated variant; converts by concatenating its children.
    Row(Vec<MathNode>),
}

impl MathNode {
    /// Convenience constructor for text leaves.
    pub fn text(value: impl Into<String>) -> Self {
        MathNode::Text(value.into())
    }
}

/// Fraction rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractionStyle {
    /// Stacked two-argument fraction command
    #[default]
    Stacked,
    /// Inline `numerator/denominator` form
    Linear,
}

/// Bar placement relative to its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
}

/// Group character placement relative to its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupPosition {
    Top,
    #[default]
    Bottom,
}
