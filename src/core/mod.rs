//! Core rendering
//!
//! - `render`: LaTeX-subset and markdown to HTML markup

pub mod render;
