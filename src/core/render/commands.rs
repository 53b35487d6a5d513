//! Argument-taking commands
//!
//! Decorated spans (`\hat{x}`), font switches (`\mathbf{x}`), blackboard bold,
//! fractions and roots. Arguments are matched with the brace-balanced scanner,
//! and each stage re-applies itself to the arguments it captures so nested
//! uses of the same command are resolved too.

use texmark_symbols::BLACKBOARD;
use tracing::debug;

use super::utils::{extract_braced_arg, extract_bracket_arg, scan_commands, Command};

// =============================================================================
// Decorated and font spans
// =============================================================================

/// Map a one-argument command to the element it opens and closes with.
fn span_tags(name: &str) -> Option<(&'static str, &'static str)> {
    let tags = match name {
        "overline" => ("<span class=\"overline\">", "</span>"),
        "underline" => ("<span class=\"underline\">", "</span>"),
        "hat" => ("<span class=\"hat\">", "</span>"),
        "widehat" => ("<span class=\"widehat\">", "</span>"),
        "tilde" => ("<span class=\"tilde\">", "</span>"),
        "widetilde" => ("<span class=\"widetilde\">", "</span>"),
        "vec" => ("<span class=\"vec\">", "</span>"),
        "bar" => ("<span class=\"bar\">", "</span>"),
        "dot" => ("<span class=\"dot\">", "</span>"),
        "ddot" => ("<span class=\"ddot\">", "</span>"),
        "text" | "textrm" => ("<span class=\"text\">", "</span>"),
        "mathrm" => ("<span class=\"mathrm\">", "</span>"),
        "mathcal" => ("<span class=\"mathcal\">", "</span>"),
        "operatorname" => ("<span class=\"fn\">", "</span>"),
        "mathbf" | "boldsymbol" | "textbf" => ("<b>", "</b>"),
        "mathit" | "textit" | "emph" => ("<i>", "</i>"),
        _ => return None,
    };
    Some(tags)
}

/// Wrap the argument of every decorating or font command.
pub fn convert_decorations(input: &str) -> String {
    scan_commands(input, |cmd, rest| {
        let Command::Word(name) = cmd else {
            return None;
        };
        let (open, close) = span_tags(name)?;
        let (arg, end) = extract_braced_arg(rest, 0)?;
        Some((format!("{}{}{}", open, convert_decorations(arg), close), end))
    })
}

// =============================================================================
// Blackboard bold
// =============================================================================

/// Replace `\mathbb{X}` with the double-struck glyph.
///
/// Letters without a glyph fall back to a `mathbb` span around the argument.
pub fn convert_blackboard(input: &str) -> String {
    scan_commands(input, |cmd, rest| {
        if cmd != Command::Word("mathbb") {
            return None;
        }
        let (arg, end) = extract_braced_arg(rest, 0)?;
        let letter = arg.trim();
        let mut chars = letter.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(c), None) => BLACKBOARD.get(&c).copied(),
            _ => None,
        };
        let replacement = match glyph {
            Some(glyph) => glyph.to_string(),
            None => format!("<span class=\"mathbb\">{}</span>", letter),
        };
        Some((replacement, end))
    })
}

// =============================================================================
// Fractions and roots
// =============================================================================

/// Render a numerator/denominator pair as one fraction unit.
pub fn fraction_html(numerator: &str, denominator: &str) -> String {
    format!(
        "<span class=\"frac\"><span class=\"num\">{}</span><span class=\"den\">{}</span></span>",
        numerator, denominator
    )
}

/// Render a radical, with an optional index shown as a superscript.
pub fn root_html(index: Option<&str>, radicand: &str) -> String {
    match index {
        Some(index) => format!(
            "<span class=\"sqrt root\"><sup class=\"root-index\">{}</sup>\
             <span class=\"radical\">√</span><span class=\"radicand\">{}</span></span>",
            index, radicand
        ),
        None => format!(
            "<span class=\"sqrt\"><span class=\"radical\">√</span>\
             <span class=\"radicand\">{}</span></span>",
            radicand
        ),
    }
}

/// Convert `\frac`/`\dfrac`/`\tfrac` and `\sqrt` with balanced arguments.
///
/// The display and text spellings produce the same markup. A command whose
/// arguments are missing or unbalanced is left as literal text.
pub fn convert_fractions_and_roots(input: &str) -> String {
    scan_commands(input, |cmd, rest| match cmd {
        Command::Word("frac" | "dfrac" | "tfrac") => {
            let parsed = extract_braced_arg(rest, 0).and_then(|(num, num_end)| {
                let (den, den_end) = extract_braced_arg(rest, num_end)?;
                Some((num, den, den_end))
            });
            match parsed {
                Some((num, den, end)) => Some((
                    fraction_html(
                        &convert_fractions_and_roots(num),
                        &convert_fractions_and_roots(den),
                    ),
                    end,
                )),
                None => {
                    debug!("fraction without two balanced arguments left as text");
                    None
                }
            }
        }
        Command::Word("sqrt") => {
            let (index, after_index) = match extract_bracket_arg(rest, 0) {
                Some((index, end)) => (Some(index.trim()), end),
                None => (None, 0),
            };
            let Some((radicand, end)) = extract_braced_arg(rest, after_index) else {
                debug!("root without a balanced argument left as text");
                return None;
            };
            let index = index.map(convert_fractions_and_roots);
            Some((
                root_html(index.as_deref(), &convert_fractions_and_roots(radicand)),
                end,
            ))
        }
        _ => None,
    })
}
