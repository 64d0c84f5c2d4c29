use anyhow::{Context, Result};
use clap::Parser;
use fastatype::cli::{Cli, fmt};
use fastatype::io::{DuplicateHeaders, FastaParser, FastaWriter};
use fastatype::models::SequenceType;
use std::io::{BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let duplicates = if cli.keep_duplicates {
        DuplicateHeaders::Keep
    } else {
        DuplicateHeaders::Overwrite
    };

    let parser = FastaParser::load(&cli.input)
        .with_context(|| format!("Failed to load FASTA file: {}", cli.input.display()))?
        .with_duplicates(duplicates);

    if cli.verbose {
        eprintln!("{}", fmt::header("fastatype Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Input", 18), parser.path().display());
        if let Some(output) = &cli.output {
            eprintln!("{}: {}", fmt::param_aligned("Output", 18), output.display());
        }
        eprintln!("{}: {}", fmt::param_aligned("Duplicate headers", 18), parser.duplicates());
        eprintln!();
        eprintln!("{}", fmt::progress(format!("Parsing {}...", parser.path().display())));
    }

    let records = parser
        .parse()
        .with_context(|| format!("Failed to parse FASTA file: {}", cli.input.display()))?;

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    for record in &records {
        writeln!(stdout, "{}\t{}\t{}", record.header, record.sequence_type, record.len())?;
    }
    stdout.flush().context("Failed to write record table")?;

    if let Some(output) = &cli.output {
        let mut writer = FastaWriter::new(output)
            .with_context(|| format!("Failed to create FASTA file: {}", output.display()))?;
        writer.write_records(&records)?;
        writer
            .finish()
            .with_context(|| format!("Failed to write FASTA file: {}", output.display()))?;
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Sequence types:");
        for sequence_type in [
            SequenceType::Dna,
            SequenceType::Rna,
            SequenceType::Protein,
            SequenceType::Unknown,
        ] {
            let count = records
                .iter()
                .filter(|r| r.sequence_type == sequence_type)
                .count();
            eprintln!("{}: {}", fmt::param_aligned(sequence_type.as_str(), 18), count);
        }
        eprintln!();
        eprintln!("{}", fmt::success(format!("Classified {} records", records.len())));
        if let Some(output) = &cli.output {
            eprintln!("{}", fmt::success(format!("Output written to {}", output.display())));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
