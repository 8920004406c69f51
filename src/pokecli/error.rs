use crate::model::Category;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingArgument,
    UnknownCategory,
    MalformedFlag,
}

/// Bad or missing command-line arguments.
///
/// Carries the usage block for the command that failed so the caller can
/// show it next to the message.
#[derive(Error, Debug, Clone)]
#[error("{message}\n\n{usage}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub usage: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>, usage: String) -> Self {
        Self {
            kind,
            message: message.into(),
            usage,
        }
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{category} '{name}' not found. Perhaps a typo?")]
    NotFound { category: Category, name: String },

    #[error("Failed to reach the API: {0}")]
    Transport(String),

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum PokeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Enrichment failed: {0}")]
    Enrichment(#[source] LookupError),

    #[error("Config error: {0}")]
    Config(String),
}

impl PokeError {
    /// Process exit status for this error when not running in test mode.
    pub fn exit_code(&self) -> i32 {
        match self {
            PokeError::Validation(_) => 2,
            PokeError::Lookup(_) | PokeError::Enrichment(_) | PokeError::Config(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_includes_usage() {
        let err = ValidationError::new(
            ValidationErrorKind::MissingArgument,
            "Please specify an ability.",
            "USAGE: poke-cli ability <ability-name>".to_string(),
        );
        let text = err.to_string();
        assert!(text.starts_with("Please specify an ability."));
        assert!(text.ends_with("USAGE: poke-cli ability <ability-name>"));
    }

    #[test]
    fn test_not_found_message() {
        let err = LookupError::NotFound {
            category: Category::Move,
            name: "flamethrowr".to_string(),
        };
        assert_eq!(err.to_string(), "Move 'flamethrowr' not found. Perhaps a typo?");
    }

    #[test]
    fn test_exit_codes() {
        let validation = PokeError::from(ValidationError::new(
            ValidationErrorKind::MalformedFlag,
            "bad flag",
            String::new(),
        ));
        assert_eq!(validation.exit_code(), 2);

        let lookup = PokeError::from(LookupError::Transport("refused".into()));
        assert_eq!(lookup.exit_code(), 1);

        let enrichment = PokeError::Enrichment(LookupError::Decode("eof".into()));
        assert_eq!(enrichment.exit_code(), 1);
    }
}
