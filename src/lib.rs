//! Texmark - LaTeX-subset and lightweight markdown to HTML markup
//!
//! Texmark turns the text an assistant writes (prose with `$...$` math,
//! fractions, matrices, headings and lists) into markup that can be injected
//! straight into a page.
//!
//! ```
//! let html = texmark::render(r"The half: $\frac{1}{2}$");
//! assert!(html.contains("class=\"frac\""));
//! ```
//!
//! Rendering is a pure function and never fails: constructs that are not
//! recognized are passed through as text. Empty input yields
//! [`EMPTY_PLACEHOLDER`].

pub mod core;
pub mod service;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::render::{
    render, stage_names, MatrixGrid, MatrixKind, RenderOptions, Renderer, Stage,
    EMPTY_PLACEHOLDER, PIPELINE,
};
pub use service::{parse_quiz, render_reply, Envelope, Operation, QuizQuestion};
pub use utils::{ServiceError, ServiceResult};
