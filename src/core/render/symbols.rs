//! Bare command substitution
//!
//! Runs after every argument-taking command has been consumed. Both passes go
//! through [`scan_commands`], which reads a command name to its end before the
//! lookup, so `\in` never matches the front of `\int` or `\infty`.

use texmark_symbols::{lookup_symbol, CONTROL_SYMBOLS, FUNCTION_NAMES};

use super::utils::{scan_commands, Command};

/// `\left.` and `\right.` open or close with no visible delimiter.
const NULL_DELIMITER: char = '.';

/// Replace every known bare command with its glyph.
///
/// Unknown commands are left untouched, as is `\\`.
pub fn substitute_symbols(input: &str) -> String {
    scan_commands(input, |cmd, rest| match cmd {
        Command::Word(name @ ("left" | "right")) if rest.starts_with(NULL_DELIMITER) => {
            let glyph = lookup_symbol(name)?;
            Some((glyph.to_string(), NULL_DELIMITER.len_utf8()))
        }
        Command::Word(name) => Some((lookup_symbol(name)?.to_string(), 0)),
        Command::Symbol(c) => Some((CONTROL_SYMBOLS.get(&c).copied()?.to_string(), 0)),
    })
}

/// Tag operator names such as `\sin` or `\lim` so they render upright.
pub fn wrap_function_names(input: &str) -> String {
    scan_commands(input, |cmd, _| match cmd {
        Command::Word(name) if FUNCTION_NAMES.contains(name) => {
            Some((format!("<span class=\"fn\">{}</span>", name), 0))
        }
        _ => None,
    })
}
