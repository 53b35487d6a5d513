//! Glyph tables for the texmark renderer.
//!
//! Every table is a compile-time `phf` map, so lookups are read-only and need
//! no initialization at runtime. Command names are stored without the leading
//! backslash; callers are expected to read the complete identifier before
//! looking it up, which is what keeps `\in` from matching the front of `\int`.

use phf::{phf_map, phf_set, Map, Set};

// =============================================================================
// Symbol groups
// =============================================================================

/// Integration and calculus operators.
pub static CALCULUS: Map<&'static str, &'static str> = phf_map! {
    "int" => "∫",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "sum" => "∑",
    "prod" => "∏",
    "coprod" => "∐",
    "partial" => "∂",
    "nabla" => "∇",
    "infty" => "∞",
    "bigcup" => "⋃",
    "bigcap" => "⋂",
    "bigoplus" => "⨁",
    "bigotimes" => "⨂",
};

/// Lowercase Greek letters, including the `var` forms.
pub static GREEK_LOWER: Map<&'static str, &'static str> = phf_map! {
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ϵ",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "vartheta" => "ϑ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "omicron" => "ο",
    "pi" => "π",
    "varpi" => "ϖ",
    "rho" => "ρ",
    "varrho" => "ϱ",
    "sigma" => "σ",
    "varsigma" => "ς",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "ϕ",
    "varphi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",
};

/// Uppercase Greek letters that differ from their Latin look-alikes.
pub static GREEK_UPPER: Map<&'static str, &'static str> = phf_map! {
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
};

/// Binary operators.
pub static OPERATORS: Map<&'static str, &'static str> = phf_map! {
    "times" => "×",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",
    "cdot" => "⋅",
    "ast" => "∗",
    "star" => "⋆",
    "circ" => "∘",
    "bullet" => "•",
    "oplus" => "⊕",
    "ominus" => "⊖",
    "otimes" => "⊗",
    "odot" => "⊙",
    "cup" => "∪",
    "cap" => "∩",
    "setminus" => "∖",
    "wr" => "≀",
};

/// Relations.
pub static RELATIONS: Map<&'static str, &'static str> = phf_map! {
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "neq" => "≠",
    "ne" => "≠",
    "approx" => "≈",
    "equiv" => "≡",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "propto" => "∝",
    "ll" => "≪",
    "gg" => "≫",
    "subset" => "⊂",
    "supset" => "⊃",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "perp" => "⊥",
    "parallel" => "∥",
    "mid" => "∣",
    "prec" => "≺",
    "succ" => "≻",
    "pitchfork" => "⋔",
};

/// Logic connectives and quantifiers.
pub static LOGIC: Map<&'static str, &'static str> = phf_map! {
    "forall" => "∀",
    "exists" => "∃",
    "nexists" => "∄",
    "neg" => "¬",
    "lnot" => "¬",
    "land" => "∧",
    "wedge" => "∧",
    "lor" => "∨",
    "vee" => "∨",
    "implies" => "⟹",
    "iff" => "⟺",
    "top" => "⊤",
    "bot" => "⊥",
    "vdash" => "⊢",
    "models" => "⊨",
    "therefore" => "∴",
    "because" => "∵",
};

/// Arrows.
pub static ARROWS: Map<&'static str, &'static str> = phf_map! {
    "to" => "→",
    "rightarrow" => "→",
    "leftarrow" => "←",
    "gets" => "←",
    "leftrightarrow" => "↔",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "mapsto" => "↦",
    "longrightarrow" => "⟶",
    "longleftarrow" => "⟵",
    "Longrightarrow" => "⟹",
    "Longleftarrow" => "⟸",
    "uparrow" => "↑",
    "downarrow" => "↓",
    "hookrightarrow" => "↪",
    "nearrow" => "↗",
    "searrow" => "↘",
};

/// Delimiters and sizing prefixes.
///
/// `\left`, `\right` and the `\big` family map to the empty string so only the
/// delimiter glyph that follows them survives.
pub static DELIMITERS: Map<&'static str, &'static str> = phf_map! {
    "langle" => "⟨",
    "rangle" => "⟩",
    "lfloor" => "⌊",
    "rfloor" => "⌋",
    "lceil" => "⌈",
    "rceil" => "⌉",
    "lbrace" => "{",
    "rbrace" => "}",
    "vert" => "|",
    "lvert" => "|",
    "rvert" => "|",
    "Vert" => "‖",
    "lVert" => "‖",
    "rVert" => "‖",
    "left" => "",
    "right" => "",
    "big" => "",
    "Big" => "",
    "bigl" => "",
    "bigr" => "",
    "Bigl" => "",
    "Bigr" => "",
};

/// Miscellaneous symbols and spacing commands.
pub static SPECIAL: Map<&'static str, &'static str> = phf_map! {
    "emptyset" => "∅",
    "varnothing" => "∅",
    "aleph" => "ℵ",
    "hbar" => "ℏ",
    "ell" => "ℓ",
    "Re" => "ℜ",
    "Im" => "ℑ",
    "wp" => "℘",
    "angle" => "∠",
    "triangle" => "△",
    "square" => "□",
    "checkmark" => "✓",
    "dagger" => "†",
    "ddagger" => "‡",
    "cdots" => "⋯",
    "ldots" => "…",
    "dots" => "…",
    "vdots" => "⋮",
    "ddots" => "⋱",
    "prime" => "′",
    "degree" => "°",
    "quad" => "\u{2003}",
    "qquad" => "\u{2003}\u{2003}",
};

/// Symbol groups in lookup order.
pub static SYMBOL_GROUPS: &[(&str, &Map<&'static str, &'static str>)] = &[
    ("calculus", &CALCULUS),
    ("greek-lower", &GREEK_LOWER),
    ("greek-upper", &GREEK_UPPER),
    ("operators", &OPERATORS),
    ("relations", &RELATIONS),
    ("logic", &LOGIC),
    ("arrows", &ARROWS),
    ("delimiters", &DELIMITERS),
    ("special", &SPECIAL),
];

/// Look up a complete command name (without backslash) in every symbol group.
pub fn lookup_symbol(name: &str) -> Option<&'static str> {
    SYMBOL_GROUPS
        .iter()
        .find_map(|(_, group)| group.get(name).copied())
}

// =============================================================================
// Control symbols, functions and blackboard bold
// =============================================================================

/// Single non-letter control symbols such as `\{` or `\,`.
///
/// Characters that would otherwise be re-read by later markup rules (`_`, `#`,
/// `&`) are emitted as numeric entities.
pub static CONTROL_SYMBOLS: Map<char, &'static str> = phf_map! {
    '{' => "{",
    '}' => "}",
    '|' => "‖",
    '%' => "%",
    '#' => "&#35;",
    '&' => "&amp;",
    '_' => "&#95;",
    ',' => "\u{2009}",
    ';' => "\u{2005}",
    ':' => "\u{205F}",
    '!' => "",
    ' ' => " ",
};

/// Operator names rendered upright as functions.
pub static FUNCTION_NAMES: Set<&'static str> = phf_set! {
    "det", "dim", "ker", "deg", "arg", "exp", "log", "ln", "lg",
    "sin", "cos", "tan", "sec", "csc", "cot",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh", "coth",
    "lim", "liminf", "limsup", "max", "min", "sup", "inf", "gcd", "Pr",
};

/// Double-struck capitals for `\mathbb{X}`.
pub static BLACKBOARD: Map<char, &'static str> = phf_map! {
    'R' => "ℝ",
    'N' => "ℕ",
    'Z' => "ℤ",
    'Q' => "ℚ",
    'C' => "ℂ",
    'H' => "ℍ",
    'P' => "ℙ",
};
