//! # calc
//!
//! Reads arithmetic expressions and assignments one line at a time.
//!

mod term;
use clap::Parser;

/// An interactive arithmetic evaluator with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of fractional digits printed for each result.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Print errors without terminal styling.
    #[arg(long)]
    plain: bool,

    /// Prompt shown before each line.
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    term::main(term::Options {
        prompt: args.prompt,
        precision: args.precision,
        plain: args.plain,
    });
}
