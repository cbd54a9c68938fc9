use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "dnalens",
    version,
    about = "Length, GC content, reverse complement, transcript and k-mer counts for a DNA sequence"
)]
pub struct Cli {
    /// Log level for dnalens crates (overrides DNALENS_LOG).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a pasted sequence, an uploaded file, or stdin.
    Analyze(AnalyzeArgs),
    /// List the file extensions accepted by --file.
    Formats,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// DNA sequence text. Case, spaces and line breaks are ignored.
    #[arg(value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Sequence file (.txt or FASTA). Takes precedence over SEQUENCE.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// k-mer size for frequency counting.
    #[arg(
        short = 'k',
        long = "kmer",
        value_name = "K",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=6)
    )]
    pub k: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the k-mer bar chart in text output.
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
