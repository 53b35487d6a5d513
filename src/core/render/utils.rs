//! Scanning helpers shared by the render stages
//!
//! These are byte-level scanners: every delimiter they look for (`\`, `{`, `}`,
//! `[`, `]`) is ASCII, so every index they return lies on a char boundary.

use std::fmt::Write;

// =============================================================================
// Protected characters
// =============================================================================

/// Stand-in for a raw `<` from the input.
pub const PROTECTED_LT: char = '\u{E000}';
/// Stand-in for a raw `>` from the input.
pub const PROTECTED_GT: char = '\u{E001}';
/// Stand-in for an escaped dollar `\$`.
pub const PROTECTED_DOLLAR: char = '\u{E002}';
/// Stand-in for a `*` inside a math body, hidden from the emphasis rules.
pub const PROTECTED_STAR: char = '\u{E003}';

fn is_protected(c: char) -> bool {
    matches!(
        c,
        PROTECTED_LT | PROTECTED_GT | PROTECTED_DOLLAR | PROTECTED_STAR
    )
}

/// Hide the `*` of a math body from the emphasis stage.
pub fn protect_math_body(body: &str) -> String {
    body.replace('*', &PROTECTED_STAR.to_string())
}

/// Replace characters that later stages would misread with private-use stand-ins.
///
/// Raw angle brackets must not be confused with emitted tags, and `\$` must not
/// open a math span.
pub fn protect_special(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'\\') => {
                out.push_str("\\\\");
                chars.next();
            }
            '\\' if chars.peek() == Some(&'$') => {
                out.push(PROTECTED_DOLLAR);
                chars.next();
            }
            '<' => out.push(PROTECTED_LT),
            '>' => out.push(PROTECTED_GT),
            // Input that already holds a stand-in keeps it as a character reference.
            c if is_protected(c) => {
                let _ = write!(out, "&#x{:X};", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

/// Turn the stand-ins back into output text.
pub fn restore_protected(input: &str, escape_html: bool) -> String {
    let (lt, gt) = if escape_html {
        ("&lt;", "&gt;")
    } else {
        ("<", ">")
    };
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            PROTECTED_LT => out.push_str(lt),
            PROTECTED_GT => out.push_str(gt),
            PROTECTED_DOLLAR => out.push('$'),
            PROTECTED_STAR => out.push('*'),
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// Brace-balanced groups
// =============================================================================

/// Skip ASCII whitespace starting at `idx`.
pub fn skip_whitespace(input: &str, mut idx: usize) -> usize {
    let bytes = input.as_bytes();
    while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
        idx += 1;
    }
    idx
}

/// Extract a balanced group opening at `start` and closing with `close`.
///
/// Returns the inner text and the index just past the closing delimiter, or
/// `None` when `start` is not `open` or the group never closes at depth zero.
/// Escaped delimiters (`\{`, `\}`) do not change the depth.
pub fn extract_balanced(input: &str, start: usize, open: u8, close: u8) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    if start >= bytes.len() || bytes[start] != open {
        return None;
    }
    let mut depth = 0usize;
    let mut idx = start;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => {
                idx += 2;
                continue;
            }
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[start + 1..idx], idx + 1));
                }
            }
            _ => {}
        }
        idx += 1;
    }
    None
}

/// Extract a `{...}` group, skipping leading whitespace first.
pub fn extract_braced_arg(input: &str, start: usize) -> Option<(&str, usize)> {
    extract_balanced(input, skip_whitespace(input, start), b'{', b'}')
}

/// Extract an optional `[...]` argument, skipping leading whitespace first.
pub fn extract_bracket_arg(input: &str, start: usize) -> Option<(&str, usize)> {
    extract_balanced(input, skip_whitespace(input, start), b'[', b']')
}

// =============================================================================
// Command scanning
// =============================================================================

/// A control sequence found by [`scan_commands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// A backslash followed by a run of ASCII letters, e.g. `alpha`.
    Word(&'a str),
    /// A backslash followed by one non-letter character, e.g. `{` or `,`.
    Symbol(char),
}

/// Walk `input` and offer every control sequence to `handler`.
///
/// The handler receives the command and the text that follows it. Returning
/// `Some((replacement, consumed))` replaces the command plus `consumed` bytes of
/// the trailing text; returning `None` leaves the command untouched. Command
/// names are always read to their full length, so a handler never sees a
/// prefix of a longer name.
pub fn scan_commands<F>(input: &str, mut handler: F) -> String
where
    F: FnMut(Command<'_>, &str) -> Option<(String, usize)>,
{
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            i += 1;
            continue;
        }

        let name_start = i + 1;
        let (command, name_end) = if bytes[name_start].is_ascii_alphabetic() {
            let mut end = name_start;
            while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
                end += 1;
            }
            (Command::Word(&input[name_start..end]), end)
        } else {
            match input[name_start..].chars().next() {
                Some(c) => (Command::Symbol(c), name_start + c.len_utf8()),
                None => break,
            }
        };

        match handler(command, &input[name_end..]) {
            Some((replacement, consumed)) => {
                out.push_str(&input[copied..i]);
                out.push_str(&replacement);
                i = name_end + consumed;
                copied = i;
            }
            None => i = name_end,
        }
    }

    out.push_str(&input[copied..]);
    out
}

/// Split on `sep`, ignoring separators escaped with a backslash.
pub fn split_unescaped<'a>(input: &'a str, sep: &str) -> Vec<&'a str> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i..].starts_with(sep.as_bytes()) {
            parts.push(&input[start..i]);
            i += sep.len();
            start = i;
            continue;
        }
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        i += 1;
    }
    parts.push(&input[start..]);
    parts
}
