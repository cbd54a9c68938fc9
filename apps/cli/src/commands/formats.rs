use std::io::{self, Write};
use std::process::ExitCode;

use dnalens_formats::detect::{FASTA_EXTENSIONS, PLAIN_TEXT_EXTENSIONS};

pub fn run() -> anyhow::Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(accepted_formats().as_bytes())?;
    Ok(ExitCode::SUCCESS)
}

pub fn accepted_formats() -> String {
    format!(
        "plain text: {}\nfasta: {}\n",
        dotted(PLAIN_TEXT_EXTENSIONS),
        dotted(FASTA_EXTENSIONS)
    )
}

fn dotted(extensions: &[&str]) -> String {
    extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}
