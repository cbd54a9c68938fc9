use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use dnalens_core::{analyze, AnalysisConfig, AnalysisReport, AnalysisRequest};
use tracing::debug;

use crate::chart::{render_bar_chart, DEFAULT_BAR_WIDTH};
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::commands::CommandError;
use crate::dto::{ErrorDto, ErrorEnvelope};

pub fn run(args: &AnalyzeArgs) -> anyhow::Result<ExitCode> {
    let config = AnalysisConfig::default();
    let outcome = execute(args, &config, &mut io::stdin().lock());

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let succeeded = write_outcome(&mut stdout, &mut stderr, &outcome, args)?;
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Resolve the raw sequence text: an uploaded file wins over pasted text,
/// and stdin is read only when neither was given.
pub fn load_input(args: &AnalyzeArgs, stdin: &mut impl Read) -> Result<String, CommandError> {
    if let Some(path) = &args.file {
        debug!(path = %path.display(), "reading sequence from file");
        return Ok(dnalens_formats::read_upload(path)?);
    }

    if let Some(text) = &args.sequence {
        return Ok(text.clone());
    }

    let mut raw = String::new();
    stdin.read_to_string(&mut raw).map_err(CommandError::Stdin)?;
    Ok(raw)
}

/// Build the request from the arguments and run one analysis.
pub fn execute(
    args: &AnalyzeArgs,
    config: &AnalysisConfig,
    stdin: &mut impl Read,
) -> Result<AnalysisReport, CommandError> {
    let raw = load_input(args, stdin)?;
    let request = AnalysisRequest::new(raw, args.k.unwrap_or(config.default_k));
    Ok(analyze(&request, config)?)
}

/// Print the report or the failure message; returns whether the analysis succeeded.
pub fn write_outcome(
    out: &mut impl Write,
    err_out: &mut impl Write,
    outcome: &Result<AnalysisReport, CommandError>,
    args: &AnalyzeArgs,
) -> anyhow::Result<bool> {
    match (outcome, args.format) {
        (Ok(report), OutputFormat::Text) => {
            out.write_all(render_text(report, !args.no_chart)?.as_bytes())?;
            Ok(true)
        }
        (Ok(report), OutputFormat::Json) => {
            let json = serde_json::to_string_pretty(report).context("serializing report")?;
            writeln!(out, "{json}")?;
            Ok(true)
        }
        (Err(err), OutputFormat::Text) => {
            let label = if err.is_warning() { "warning" } else { "error" };
            writeln!(err_out, "{label}: {err}")?;
            Ok(false)
        }
        (Err(err), OutputFormat::Json) => {
            let envelope = ErrorEnvelope {
                error: ErrorDto::from(err),
            };
            let json = serde_json::to_string_pretty(&envelope).context("serializing error")?;
            writeln!(out, "{json}")?;
            Ok(false)
        }
    }
}

/// Human-readable report, optionally followed by the k-mer bar chart.
pub fn render_text(report: &AnalysisReport, with_chart: bool) -> anyhow::Result<String> {
    let histogram = &report.kmer_histogram;
    let mut out = String::new();

    out.push_str("DNA analysis complete\n\n");
    out.push_str(&format!("Length: {} bases\n", report.length));
    out.push_str(&format!("GC Content: {:.2}%\n", report.gc_content));
    out.push_str(&format!("Reverse Complement: {}\n", report.reverse_complement));
    out.push_str(&format!("Transcribed RNA: {}\n", report.transcript));

    out.push_str(&format!("\nk-mer Frequencies (k={}):\n", report.k));
    if histogram.is_empty() {
        out.push_str("(sequence is shorter than k, no k-mers)\n");
        return Ok(out);
    }
    let json = serde_json::to_string_pretty(histogram).context("serializing k-mer counts")?;
    out.push_str(&json);
    out.push('\n');

    if with_chart {
        out.push_str("\nk-mer Frequency Plot:\n");
        out.push_str(&render_bar_chart(histogram, DEFAULT_BAR_WIDTH));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(sequence: Option<&str>, k: Option<usize>) -> AnalyzeArgs {
        AnalyzeArgs {
            sequence: sequence.map(str::to_string),
            file: None,
            k,
            format: OutputFormat::Text,
            no_chart: false,
        }
    }

    #[test]
    fn test_sequence_argument_used_before_stdin() {
        let mut stdin = "GGGG".as_bytes();
        let raw = load_input(&args(Some("ATGC"), None), &mut stdin).unwrap();
        assert_eq!(raw, "ATGC");
    }

    #[test]
    fn test_falls_back_to_stdin() {
        let mut stdin = "atg\ncgc\n".as_bytes();
        let report = execute(&args(None, Some(2)), &AnalysisConfig::default(), &mut stdin).unwrap();
        assert_eq!(report.length, 6);
        assert_eq!(report.k, 2);
    }

    #[test]
    fn test_default_k_from_config() {
        let mut stdin = io::empty();
        let report =
            execute(&args(Some("ATGCGC"), None), &AnalysisConfig::default(), &mut stdin).unwrap();
        assert_eq!(report.k, 3);
        assert_eq!(report.kmer_histogram.total(), 4);
    }

    #[test]
    fn test_render_text_without_chart() {
        let mut stdin = io::empty();
        let report =
            execute(&args(Some("ATGCGC"), Some(2)), &AnalysisConfig::default(), &mut stdin)
                .unwrap();
        let text = render_text(&report, false).unwrap();
        let expected = "DNA analysis complete\n\
            \n\
            Length: 6 bases\n\
            GC Content: 66.67%\n\
            Reverse Complement: GCGCAT\n\
            Transcribed RNA: AUGCGC\n\
            \n\
            k-mer Frequencies (k=2):\n\
            {\n  \"AT\": 1,\n  \"TG\": 1,\n  \"GC\": 2,\n  \"CG\": 1\n}\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_with_chart() {
        let mut stdin = io::empty();
        let report =
            execute(&args(Some("ATGCGC"), Some(2)), &AnalysisConfig::default(), &mut stdin)
                .unwrap();
        let text = render_text(&report, true).unwrap();
        assert!(text.contains("k-mer Frequency Plot:\n"));
        assert!(text.contains(&format!("GC | {} 2\n", "█".repeat(DEFAULT_BAR_WIDTH))));
        assert!(text.ends_with(&format!("CG | {} 1\n", "█".repeat(DEFAULT_BAR_WIDTH / 2))));
    }

    #[test]
    fn test_empty_input_writes_warning() {
        let a = args(Some("  \n"), None);
        let outcome = execute(&a, &AnalysisConfig::default(), &mut io::empty());
        let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
        let succeeded = write_outcome(&mut out, &mut err, &outcome, &a).unwrap();

        assert!(!succeeded);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "warning: Please upload or paste a DNA sequence.\n"
        );
    }

    #[test]
    fn test_invalid_sequence_json_error() {
        let mut a = args(Some("ATGZ"), None);
        a.format = OutputFormat::Json;
        let outcome = execute(&a, &AnalysisConfig::default(), &mut io::empty());
        let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
        let succeeded = write_outcome(&mut out, &mut err, &outcome, &a).unwrap();

        assert!(!succeeded);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["error"]["kind"], "invalidAlphabet");
        assert!(err.is_empty());
    }
}
