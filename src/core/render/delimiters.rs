//! Math delimiter resolution
//!
//! Display math (`\[..\]`, `$$..$$`) is resolved in its own pass before inline
//! math (`\(..\)`, `$..$`), otherwise the single-dollar rule would eat half of
//! every `$$`. Bodies are carried through with `*` protected; later stages
//! rewrite the LaTeX inside them.

use tracing::debug;

use super::utils::protect_math_body;

/// Opening/closing delimiter pair for one math form.
#[derive(Debug, Clone, Copy)]
struct MathForm {
    open: &'static str,
    close: &'static str,
    /// Whether the body may span lines.
    multiline: bool,
}

const DISPLAY_FORMS: &[MathForm] = &[
    MathForm {
        open: "\\[",
        close: "\\]",
        multiline: true,
    },
    MathForm {
        open: "$$",
        close: "$$",
        multiline: true,
    },
];

const INLINE_FORMS: &[MathForm] = &[
    MathForm {
        open: "\\(",
        close: "\\)",
        multiline: true,
    },
    MathForm {
        open: "$",
        close: "$",
        multiline: false,
    },
];

/// Resolve display math first, then inline math.
pub fn resolve_math_delimiters(input: &str) -> String {
    let display = resolve_forms(input, DISPLAY_FORMS, wrap_display);
    resolve_forms(&display, INLINE_FORMS, wrap_inline)
}

/// Display math becomes its own block, separated from the surrounding prose.
fn wrap_display(body: &str) -> String {
    format!(
        "\n\n<div class=\"math-display\">{}</div>\n\n",
        protect_math_body(body)
    )
}

fn wrap_inline(body: &str) -> String {
    format!("<span class=\"math-inline\">{}</span>", protect_math_body(body))
}

/// Rewrite every delimited span matching one of `forms`.
///
/// Forms are tried in order at each position. An opener without a matching
/// closer, or with an empty body, is copied through as literal text.
fn resolve_forms(input: &str, forms: &[MathForm], wrap: fn(&str) -> String) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    'scan: while i < bytes.len() {
        for form in forms {
            if !bytes[i..].starts_with(form.open.as_bytes()) {
                continue;
            }
            let body_start = i + form.open.len();
            match find_closer(input, body_start, form) {
                Some(body_end) if !input[body_start..body_end].trim().is_empty() => {
                    out.push_str(&input[copied..i]);
                    out.push_str(&wrap(&input[body_start..body_end]));
                    i = body_end + form.close.len();
                    copied = i;
                }
                _ => {
                    debug!(delimiter = form.open, "unterminated math delimiter left as text");
                    i = body_start;
                }
            }
            continue 'scan;
        }

        // `\\` is a line break, never the start of `\[` or `\(`.
        i += if bytes[i] == b'\\' { 2 } else { 1 };
    }

    if copied < input.len() {
        out.push_str(&input[copied..]);
    }
    out
}

/// Find the start of the closing delimiter for a body beginning at `from`.
fn find_closer(input: &str, from: usize, form: &MathForm) -> Option<usize> {
    let bytes = input.as_bytes();
    let close = form.close.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i..].starts_with(close) {
            return Some(i);
        }
        match bytes[i] {
            b'\n' if !form.multiline => return None,
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    None
}
