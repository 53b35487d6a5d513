//! The ordered render pipeline
//!
//! Each stage is a pure `&str -> String` function. The order below is load
//! bearing: delimiters and structural environments must be resolved before
//! bare symbols are substituted, fractions before scripts, and everything
//! LaTeX before the markdown block stages.

use tracing::{debug, trace};

use super::{commands, delimiters, environment, markup, scripts, symbols, utils};

/// A named step of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stable name, usable with [`Renderer::render_through`].
    pub name: &'static str,
    /// The rewrite this stage applies.
    pub apply: fn(&str) -> String,
}

/// Name of the output normalization stage, skipped when disabled in options.
pub const NORMALIZE_STAGE: &str = "normalize";

/// All stages in application order.
pub static PIPELINE: &[Stage] = &[
    Stage {
        name: "protect",
        apply: utils::protect_special,
    },
    Stage {
        name: "math-delimiters",
        apply: delimiters::resolve_math_delimiters,
    },
    Stage {
        name: "matrices",
        apply: environment::convert_matrices,
    },
    Stage {
        name: "decorations",
        apply: commands::convert_decorations,
    },
    Stage {
        name: "blackboard",
        apply: commands::convert_blackboard,
    },
    Stage {
        name: "fractions",
        apply: commands::convert_fractions_and_roots,
    },
    Stage {
        name: "symbols",
        apply: symbols::substitute_symbols,
    },
    Stage {
        name: "functions",
        apply: symbols::wrap_function_names,
    },
    Stage {
        name: "scripts",
        apply: scripts::convert_scripts,
    },
    Stage {
        name: "emphasis",
        apply: markup::convert_emphasis,
    },
    Stage {
        name: "blocks",
        apply: markup::build_blocks,
    },
    Stage {
        name: NORMALIZE_STAGE,
        apply: markup::normalize_output,
    },
];

/// Stage names in application order.
pub fn stage_names() -> impl Iterator<Item = &'static str> {
    PIPELINE.iter().map(|stage| stage.name)
}

// =============================================================================
// Options
// =============================================================================

/// Placeholder emitted for empty or whitespace-only input.
pub const EMPTY_PLACEHOLDER: &str = "<p class=\"placeholder error\">No content to display.</p>";

/// Options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Guarantee a block-level opening and closing wrapper
    /// Default: true
    pub normalize_output: bool,

    /// Emit raw `<` and `>` from the input as `&lt;`/`&gt;`
    /// Default: true
    pub escape_html: bool,

    /// Markup returned for empty input
    /// Default: [`EMPTY_PLACEHOLDER`]
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            normalize_output: true,
            escape_html: true,
            placeholder: EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip normalization and escaping, for callers that post-process the markup
    pub fn raw() -> Self {
        Self {
            normalize_output: false,
            escape_html: false,
            ..Self::default()
        }
    }

    /// Use a custom placeholder for empty input
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Runs the pipeline with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render text to markup. `None` is treated as empty input.
    pub fn render<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        self.run(input.into(), None)
            .unwrap_or_else(|| self.options.placeholder.clone())
    }

    /// Render up to and including the named stage.
    ///
    /// Returns `None` when no stage has that name. Empty input still yields
    /// the placeholder.
    pub fn render_through<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        stage: &str,
    ) -> Option<String> {
        if !stage_names().any(|name| name == stage) {
            return None;
        }
        Some(
            self.run(input.into(), Some(stage))
                .unwrap_or_else(|| self.options.placeholder.clone()),
        )
    }

    /// Returns `None` for empty input.
    fn run(&self, input: Option<&str>, last_stage: Option<&str>) -> Option<String> {
        let input = input.unwrap_or_default();
        if input.trim().is_empty() {
            debug!("empty input, emitting placeholder");
            return None;
        }

        let mut text = input.to_string();
        for stage in PIPELINE {
            if stage.name == NORMALIZE_STAGE && !self.options.normalize_output {
                trace!(stage = stage.name, "stage disabled");
            } else {
                text = (stage.apply)(&text);
                trace!(stage = stage.name, bytes = text.len(), "stage applied");
            }
            if last_stage == Some(stage.name) {
                break;
            }
        }

        Some(utils::restore_protected(&text, self.options.escape_html))
    }
}

/// Render with default options.
pub fn render<'a>(input: impl Into<Option<&'a str>>) -> String {
    Renderer::default().render(input)
}
