//! JSON shapes for machine-readable output.

use dnalens_core::AnalysisError;
use dnalens_formats::ParseError;
use serde::Serialize;

use crate::commands::CommandError;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub kind: String,
    pub message: String,
    pub is_warning: bool,
}

impl From<&AnalysisError> for ErrorDto {
    fn from(err: &AnalysisError) -> Self {
        let kind = match err {
            AnalysisError::EmptyInput => "emptyInput",
            AnalysisError::InvalidAlphabet { .. } => "invalidAlphabet",
            AnalysisError::KmerSizeOutOfRange { .. } => "kmerSizeOutOfRange",
        };
        ErrorDto {
            kind: kind.to_string(),
            message: err.to_string(),
            is_warning: err.is_warning(),
        }
    }
}

impl From<&ParseError> for ErrorDto {
    fn from(err: &ParseError) -> Self {
        let kind = match err {
            ParseError::InvalidFormat(_) => "invalidFormat",
            ParseError::UnsupportedFile(_) => "unsupportedFile",
            ParseError::Io(_) => "io",
        };
        ErrorDto {
            kind: kind.to_string(),
            message: err.to_string(),
            is_warning: false,
        }
    }
}

impl From<&CommandError> for ErrorDto {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::Analysis(e) => ErrorDto::from(e),
            CommandError::Upload(e) => ErrorDto::from(e),
            CommandError::Stdin(e) => ErrorDto {
                kind: "io".to_string(),
                message: format!("Failed to read stdin: {}", e),
                is_warning: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_warning() {
        let dto = ErrorDto::from(&AnalysisError::EmptyInput);
        assert_eq!(dto.kind, "emptyInput");
        assert!(dto.is_warning);
    }

    #[test]
    fn test_envelope_json() {
        let err = AnalysisError::InvalidAlphabet { base: 'Z', position: 3 };
        let json = serde_json::to_value(ErrorEnvelope { error: ErrorDto::from(&err) }).unwrap();
        assert_eq!(json["error"]["kind"], "invalidAlphabet");
        assert_eq!(json["error"]["isWarning"], false);
        assert_eq!(json["error"]["message"], err.to_string());
    }
}
