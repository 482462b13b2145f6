//! Static symbol tables for LaTeX conversion.
//!
//! Compile-time perfect-hash tables mapping math glyphs to LaTeX commands:
//! Unicode characters in text runs, N-ary operator glyphs, accent marks,
//! delimiter glyphs, and the whitelist of function names that render as
//! escaped commands. Unmapped glyphs pass through unchanged.

use phf::{phf_map, phf_set};

/// Unicode to LaTeX mapping for characters appearing in text runs.
pub static UNICODE_TO_LATEX: phf::Map<char, &'static str> = phf_map! {
    // Lowercase Greek
    'α' => "\\alpha",
    'β' => "\\beta",
    'γ' => "\\gamma",
    'δ' => "\\delta",
    'ε' => "\\epsilon",
    'ζ' => "\\zeta",
    'η' => "\\eta",
    'θ' => "\\theta",
    'ι' => "\\iota",
    'κ' => "\\kappa",
    'λ' => "\\lambda",
    'μ' => "\\mu",
    'ν' => "\\nu",
    'ξ' => "\\xi",
    'π' => "\\pi",
    'ρ' => "\\rho",
    'σ' => "\\sigma",
    'τ' => "\\tau",
    'υ' => "\\upsilon",
    'φ' => "\\phi",
    'χ' => "\\chi",
    'ψ' => "\\psi",
    'ω' => "\\omega",

    // Uppercase Greek
    'Γ' => "\\Gamma",
    'Δ' => "\\Delta",
    'Θ' => "\\Theta",
    'Λ' => "\\Lambda",
    'Ξ' => "\\Xi",
    'Π' => "\\Pi",
    'Σ' => "\\Sigma",
    'Φ' => "\\Phi",
    'Ψ' => "\\Psi",
    'Ω' => "\\Omega",

    // Operators and relations
    '±' => "\\pm",
    '×' => "\\times",
    '÷' => "\\div",
    '∂' => "\\partial",
    '∇' => "\\nabla",
    '√' => "\\sqrt",
    '∞' => "\\infty",
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∫' => "\\int",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '≠' => "\\neq",
    '≤' => "\\leq",
    '≥' => "\\geq",
    '≈' => "\\approx",
    '≡' => "\\equiv",
    '∈' => "\\in",
    '∉' => "\\notin",
    '⊂' => "\\subset",
    '⊃' => "\\supset",
    '⊆' => "\\subseteq",
    '⊇' => "\\supseteq",
    '∪' => "\\cup",
    '∩' => "\\cap",
    '∅' => "\\emptyset",
    '∀' => "\\forall",
    '∃' => "\\exists",
    '¬' => "\\neg",
    '∧' => "\\wedge",
    '∨' => "\\vee",
    '→' => "\\rightarrow",
    '←' => "\\leftarrow",
    '⇒' => "\\Rightarrow",
    '⇐' => "\\Leftarrow",
    '⇔' => "\\Leftrightarrow",
    '⋅' => "\\cdot",
    '…' => "\\ldots",
    '⋯' => "\\cdots",
    '⋮' => "\\vdots",
    '⋱' => "\\ddots",

    // Superscript digit shorthands
    '⁰' => "^{0}",
    '¹' => "^{1}",
    '²' => "^{2}",
    '³' => "^{3}",
    '⁴' => "^{4}",
    '⁵' => "^{5}",
    '⁶' => "^{6}",
    '⁷' => "^{7}",
    '⁸' => "^{8}",
    '⁹' => "^{9}",

    // Combining accent marks
    '\u{0302}' => "\\hat",
    '\u{0304}' => "\\bar",
    '\u{0307}' => "\\dot",
    '\u{0308}' => "\\ddot",
    '\u{0303}' => "\\tilde",
    '\u{20D7}' => "\\vec",
};

/// N-ary operator glyph to LaTeX command.
pub static NARY_OPERATORS: phf::Map<char, &'static str> = phf_map! {
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∫' => "\\int",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '∮' => "\\oint",
};

/// Accent glyph to LaTeX command.
pub static ACCENTS: phf::Map<char, &'static str> = phf_map! {
    '\u{0302}' => "\\hat",
    '\u{0304}' => "\\bar",
    '\u{0307}' => "\\dot",
    '\u{0308}' => "\\ddot",
    '\u{0303}' => "\\tilde",
    '\u{20D7}' => "\\vec",
    '\u{0305}' => "\\overline",
    '\u{23DE}' => "\\overbrace",
    '\u{23DF}' => "\\underbrace",
};

/// Delimiter glyph to LaTeX bracket command. The empty glyph is an
/// invisible delimiter; glyphs not in the table pass through unchanged.
pub static DELIMITERS: phf::Map<&'static str, &'static str> = phf_map! {
    "{" => "\\{",
    "}" => "\\}",
    "" => ".",
    "|" => "|",
    "‖" => "\\|",
    "⌈" => "\\lceil",
    "⌉" => "\\rceil",
    "⌊" => "\\lfloor",
    "⌋" => "\\rfloor",
    "⟨" => "\\langle",
    "⟩" => "\\rangle",
};

/// Function names that render as escaped LaTeX commands.
pub static KNOWN_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh",
    "log", "ln", "exp", "lim", "max", "min",
    "sup", "inf", "det", "dim", "gcd",
};
