//! WASM bindings for texmark
//!
//! This module provides JavaScript-accessible rendering for the browser front end.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::core::render::{RenderOptions, Renderer};

/// Render options (exposed to WASM)
#[derive(Serialize, Deserialize)]
pub struct WasmRenderOptions {
    /// Guarantee a block-level wrapper around the output
    #[serde(default = "default_true")]
    pub normalize_output: bool,
    /// Escape raw `<` and `>` from the input
    #[serde(default = "default_true")]
    pub escape_html: bool,
    /// Markup returned for empty input
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl Default for WasmRenderOptions {
    fn default() -> Self {
        Self {
            normalize_output: true,
            escape_html: true,
            placeholder: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl From<WasmRenderOptions> for RenderOptions {
    fn from(opts: WasmRenderOptions) -> Self {
        let defaults = RenderOptions::default();
        RenderOptions {
            normalize_output: opts.normalize_output,
            escape_html: opts.escape_html,
            placeholder: opts.placeholder.unwrap_or(defaults.placeholder),
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render text to markup
///
/// # Arguments
/// * `input` - Text with LaTeX math and markdown; `null`/`undefined` count as empty
///
/// # Returns
/// HTML markup, or the placeholder for empty input
#[wasm_bindgen(js_name = "renderMarkup")]
pub fn render_markup_wasm(input: Option<String>) -> String {
    crate::render(input.as_deref())
}

/// Render text to markup with options
///
/// Unreadable options fall back to the defaults.
#[wasm_bindgen(js_name = "renderMarkupWithOptions")]
pub fn render_markup_with_options_wasm(input: Option<String>, options: JsValue) -> String {
    let opts: WasmRenderOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    Renderer::new(opts.into()).render(input.as_deref())
}

/// Names of the pipeline stages, in order
#[wasm_bindgen(js_name = "renderStages")]
pub fn render_stages_wasm() -> Vec<String> {
    crate::stage_names().map(str::to_string).collect()
}
