//! numeral-svg — print numeral glyphs as SVG on stdout.
//!
//! ```text
//! numeral-svg cistercian 1234
//! numeral-svg basingstoke --text "call 555 0199"
//! ```

use std::process::ExitCode;

use clap::Parser;
use numeralib::{render_glyph_svg, render_text_to_svgs, SystemId};

#[derive(Parser)]
#[command(name = "numeral-svg", version, about = "Render Cistercian / Basingstoke numerals as SVG")]
struct Cli {
    /// Numeral system: cistercian or basingstoke.
    system: SystemId,

    /// Value to render (default: 1234 for cistercian, 42 for basingstoke).
    #[arg(allow_negative_numbers = true, conflicts_with = "text")]
    value: Option<i64>,

    /// Chunk free text and print one SVG per numeral.
    #[arg(long)]
    text: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(text) = cli.text {
        for numeral in render_text_to_svgs(&text, cli.system) {
            print!("{}", numeral.svg);
        }
        return ExitCode::SUCCESS;
    }

    let value = cli.value.unwrap_or(match cli.system {
        SystemId::Cistercian => 1234,
        SystemId::Basingstoke => 42,
    });

    match render_glyph_svg(cli.system, value) {
        Ok(svg) => {
            print!("{svg}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
