//! Texmark CLI - render LaTeX-subset and markdown text to HTML markup

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texmark::{stage_names, RenderOptions, Renderer};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texmark")]
#[command(version)]
#[command(about = "Texmark - LaTeX-subset and markdown to HTML markup renderer", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Print a JSON object instead of bare markup
    #[arg(long)]
    json: bool,

    /// Skip output normalization and HTML escaping
    #[arg(long)]
    raw: bool,

    /// Keep raw `<` and `>` from the input unescaped
    #[arg(long)]
    no_escape: bool,

    /// Stop after the named pipeline stage and print the intermediate text
    #[arg(long, value_name = "STAGE")]
    through: Option<String>,

    /// List the pipeline stages in order and exit
    #[arg(long)]
    list_stages: bool,

    /// Log pipeline stages to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    markup: &'a str,
    stages: usize,
    through: Option<&'a str>,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_stages {
        for name in stage_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut options = if cli.raw {
        RenderOptions::raw()
    } else {
        RenderOptions::new()
    };
    if cli.no_escape {
        options.escape_html = false;
    }
    let renderer = Renderer::new(options);

    let markup = match cli.through.as_deref() {
        Some(stage) => match renderer.render_through(input.as_str(), stage) {
            Some(markup) => markup,
            None => {
                let known: Vec<_> = stage_names().collect();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown stage '{}' (known: {})", stage, known.join(", ")),
                ));
            }
        },
        None => renderer.render(input.as_str()),
    };

    let result = if cli.json {
        let out = JsonOutput {
            markup: &markup,
            stages: stage_names().count(),
            through: cli.through.as_deref(),
        };
        serde_json::to_string_pretty(&out)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
    } else {
        markup
    };

    // Write output
    match cli.output {
        Some(ref path) => fs::write(path, format!("{}\n", result))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", result)?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texmark --features cli");
    eprintln!("  texmark [OPTIONS] [INPUT_FILE]");
}
