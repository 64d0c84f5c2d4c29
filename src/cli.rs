// Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fastatype",
    version,
    about = "Parse FASTA files and classify each sequence as DNA, RNA or protein",
    long_about = None
)]
pub struct Cli {
    /// Input sequences (FASTA format)
    #[arg(short = 'i', long, value_name = "FASTA")]
    pub input: PathBuf,

    /// Write records back as FASTA with the inferred type in each description
    #[arg(short = 'o', long, value_name = "FASTA")]
    pub output: Option<PathBuf>,

    /// Keep every record when headers repeat instead of letting the last one win
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Styled status lines for stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(text: &str) -> String {
        style(format!("== {} ==", text)).bold().cyan().to_string()
    }

    /// Parameter name padded to `width` so values line up.
    pub fn param_aligned(name: &str, width: usize) -> String {
        style(format!("{:<width$}", name, width = width))
            .dim()
            .to_string()
    }

    pub fn progress(text: impl Display) -> String {
        format!("{} {}", style("→").yellow(), text)
    }

    pub fn success(text: impl Display) -> String {
        format!("{} {}", style("✓").green().bold(), text)
    }
}
