//! Emphasis, block structure and output normalization
//!
//! The lightweight-markdown half of the renderer. By the time these stages run
//! all LaTeX has been rewritten, so they only see prose, emitted tags and the
//! `\\` line-break token.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*([^*\n]+?)\*\*").expect("bold pattern");
    static ref ITALIC: Regex = Regex::new(r"\*([^*\s][^*\n]*?)\*").expect("italic pattern");
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\r?\n(?:[ \t\r]*\n)+").expect("paragraph pattern");
    static ref HEADING: Regex = Regex::new(r"^(#{1,3})\s+(.+)$").expect("heading pattern");
    static ref UNORDERED_ITEM: Regex = Regex::new(r"^[-*+]\s+(.*)$").expect("list pattern");
    static ref ORDERED_ITEM: Regex = Regex::new(r"^\d+[.)]\s+(.*)$").expect("list pattern");
    static ref LINE_BREAK: Regex = Regex::new(r"\\\\|\\newline\b").expect("line break pattern");
}

const DISPLAY_OPEN: &str = "<div class=\"math-display\">";
const MATRIX_OPEN: &str = "<table class=\"matrix ";

const HEADING_CLOSERS: &[&str] = &["</h1>", "</h2>", "</h3>"];

/// Paragraph reopened after a heading that ends the document.
const REOPENED_PARAGRAPH: &str = "<p></p>";

/// Tags that count as a block-level start for output normalization.
const BLOCK_OPENERS: &[&str] = &["<p>", "<p ", "<h1", "<h2", "<h3", "<div", "<table", "<ul", "<ol"];

/// Tags that count as a block-level end for output normalization.
const BLOCK_CLOSERS: &[&str] = &[
    "</p>", "</h1>", "</h2>", "</h3>", "</div>", "</table>", "</ul>", "</ol>",
];

// =============================================================================
// Inline emphasis
// =============================================================================

/// `**bold**` becomes `<strong>`, then `*italic*` becomes `<em>`.
pub fn convert_emphasis(input: &str) -> String {
    let bold = BOLD.replace_all(input, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

// =============================================================================
// Block structure
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Accumulates the blocks of one blank-line separated chunk.
#[derive(Debug, Default)]
struct BlockBuilder {
    out: String,
    paragraph: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
}

impl BlockBuilder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let _ = write!(self.out, "<p>{}</p>", self.paragraph.join("\n"));
        self.paragraph.clear();
    }

    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            let _ = write!(self.out, "<{}>", kind.tag());
            for item in items {
                let _ = write!(self.out, "<li>{}</li>", item);
            }
            let _ = write!(self.out, "</{}>", kind.tag());
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.flush();
        let _ = write!(self.out, "<h{level}>{text}</h{level}>");
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        self.flush_paragraph();
        if matches!(self.list, Some((current, _)) if current != kind) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| (kind, Vec::new()))
            .1
            .push(text.to_string());
    }

    fn text_line(&mut self, line: &str) {
        self.flush_list();
        self.paragraph.push(line.to_string());
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}

/// Whether a chunk is a single display block or matrix table emitted by an
/// earlier stage, which must not be wrapped in a paragraph.
fn is_standalone_block(chunk: &str) -> bool {
    let single = |open: &str, close: &str| {
        chunk.starts_with(open) && chunk.ends_with(close) && chunk.matches(open).count() == 1
    };
    single(DISPLAY_OPEN, "</div>") || single(MATRIX_OPEN, "</table>")
}

fn build_chunk(chunk: &str) -> String {
    let mut builder = BlockBuilder::default();
    for line in chunk.lines() {
        let line = line.trim();
        if line.is_empty() {
            builder.flush();
        } else if let Some(caps) = HEADING.captures(line) {
            builder.heading(caps[1].len(), &caps[2]);
        } else if let Some(caps) = UNORDERED_ITEM.captures(line) {
            builder.list_item(ListKind::Unordered, &caps[1]);
        } else if let Some(caps) = ORDERED_ITEM.captures(line) {
            builder.list_item(ListKind::Ordered, &caps[1]);
        } else {
            builder.text_line(line);
        }
    }
    builder.finish()
}

/// Split into paragraphs on blank lines and build headings, lists and
/// paragraphs; `\\` and `\newline` become `<br>`.
///
/// A heading ends the current paragraph and reopens one after it, so the
/// heading never swallows the text that follows it. When nothing follows,
/// the reopened paragraph is left empty.
pub fn build_blocks(input: &str) -> String {
    let input = LINE_BREAK.replace_all(input, "<br>");
    let mut out = String::with_capacity(input.len() + 32);
    for chunk in PARAGRAPH_BREAK.split(&input) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        if is_standalone_block(chunk) {
            out.push_str(chunk);
        } else {
            out.push_str(&build_chunk(chunk));
        }
    }
    if HEADING_CLOSERS.iter().any(|tag| out.ends_with(tag)) {
        out.push_str(REOPENED_PARAGRAPH);
    }
    out
}

// =============================================================================
// Output normalization
// =============================================================================

/// Make sure the markup opens and closes as a block.
///
/// A best-effort prefix/suffix check, not a tag balancer: a missing block
/// opener gets a `<p>` prepended, and a missing block closer gets a `</p>`
/// appended unless the markup contains a forced `<br>`.
pub fn normalize_output(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len() + 7);
    if !BLOCK_OPENERS.iter().any(|tag| trimmed.starts_with(tag)) {
        out.push_str("<p>");
    }
    out.push_str(trimmed);
    if !BLOCK_CLOSERS.iter().any(|tag| trimmed.ends_with(tag)) && !trimmed.contains("<br>") {
        out.push_str("</p>");
    }
    out
}
