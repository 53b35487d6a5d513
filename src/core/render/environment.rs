//! Matrix environments
//!
//! `\begin{kind} ... \end{kind}` for the five matrix kinds is turned into an
//! HTML table tagged with the kind, so the presentation layer can pick the
//! bracket glyphs. Only one level is matched: the body runs to the first
//! `\end{kind}` with the same name.

use std::fmt::Write;

use super::utils::split_unescaped;

/// The matrix environments that are parsed structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// `pmatrix`, parentheses
    Paren,
    /// `bmatrix`, square brackets
    Bracket,
    /// `matrix`, no delimiters
    Plain,
    /// `vmatrix`, single bars
    Bar,
    /// `Vmatrix`, double bars
    DoubleBar,
}

impl MatrixKind {
    /// Look up a kind by environment name.
    pub fn from_env_name(name: &str) -> Option<Self> {
        match name {
            "pmatrix" => Some(MatrixKind::Paren),
            "bmatrix" => Some(MatrixKind::Bracket),
            "matrix" => Some(MatrixKind::Plain),
            "vmatrix" => Some(MatrixKind::Bar),
            "Vmatrix" => Some(MatrixKind::DoubleBar),
            _ => None,
        }
    }

    /// Environment name, also used as the table's kind class.
    pub fn env_name(self) -> &'static str {
        match self {
            MatrixKind::Paren => "pmatrix",
            MatrixKind::Bracket => "bmatrix",
            MatrixKind::Plain => "matrix",
            MatrixKind::Bar => "vmatrix",
            MatrixKind::DoubleBar => "Vmatrix",
        }
    }
}

/// A matrix body split into trimmed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGrid<'a> {
    pub kind: MatrixKind,
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> MatrixGrid<'a> {
    /// Split a body into rows on `\\` and cells on `&`.
    ///
    /// An empty body has no rows. Blank rows produced by stray separators are
    /// kept as rows with a single empty cell.
    pub fn parse(kind: MatrixKind, body: &'a str) -> Self {
        let body = body.trim();
        let rows = if body.is_empty() {
            Vec::new()
        } else {
            split_unescaped(body, "\\\\")
                .into_iter()
                .map(|row| {
                    split_unescaped(row.trim(), "&")
                        .into_iter()
                        .map(str::trim)
                        .collect()
                })
                .collect()
        };
        MatrixGrid { kind, rows }
    }

    /// Render as `<table class="matrix KIND">`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<table class=\"matrix {}\">", self.kind.env_name());
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", cell);
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        out
    }
}

const BEGIN: &str = "\\begin{";

/// Replace every recognized matrix environment with its table.
///
/// Unknown environments and environments without a matching `\end` are left
/// untouched.
pub fn convert_matrices(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(BEGIN) {
        let after_begin = &rest[pos + BEGIN.len()..];
        let parsed = after_begin.find('}').and_then(|name_end| {
            let kind = MatrixKind::from_env_name(&after_begin[..name_end])?;
            let body = &after_begin[name_end + 1..];
            let end_marker = format!("\\end{{{}}}", kind.env_name());
            let body_end = body.find(&end_marker)?;
            let grid = MatrixGrid::parse(kind, &body[..body_end]);
            let consumed = BEGIN.len() + name_end + 1 + body_end + end_marker.len();
            Some((grid.to_html(), consumed))
        });

        match parsed {
            Some((html, consumed)) => {
                out.push_str(&rest[..pos]);
                out.push_str(&html);
                rest = &rest[pos + consumed..];
            }
            None => {
                out.push_str(&rest[..pos + BEGIN.len()]);
                rest = after_begin;
            }
        }
    }

    out.push_str(rest);
    out
}
