//! LaTeX-subset and markdown to HTML renderer
//!
//! The renderer is an ordered pipeline of pure string rewrites (see
//! [`pipeline::PIPELINE`]). It never fails: constructs it does not recognize,
//! or cannot match, are passed through as literal text.

pub mod commands;
pub mod delimiters;
pub mod environment;
pub mod markup;
pub mod pipeline;
pub mod scripts;
pub mod symbols;
pub mod utils;

pub use environment::{MatrixGrid, MatrixKind};
pub use pipeline::{
    render, stage_names, RenderOptions, Renderer, Stage, EMPTY_PLACEHOLDER, PIPELINE,
};
