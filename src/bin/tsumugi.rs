use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tsumugi::prelude::{and_then, byte, literal, Input};
use tsumugi::run;

/// Demonstration driver: parses a parenthesized "bebou" literal and prints
/// the matched body.
#[derive(Parser)]
#[command(author, version, about = "Parse a parenthesized bebou literal")]
struct Cli {
    /// Input text to parse
    #[arg(default_value = "(bebou)")]
    input: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let parser = and_then(byte(b'('), and_then(literal("bebou"), byte(b')')));

    match run(&parser, Input::from(cli.input.as_str())) {
        Ok(((_, (body, _)), remaining)) => {
            debug!(%remaining, "parse succeeded");
            println!("{}", body);
        }
        Err(e) => {
            error!(error = %e, "parse failed");
            std::process::exit(1);
        }
    }
}
