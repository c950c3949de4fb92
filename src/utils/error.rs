use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassgenError {
    #[error("Wordlist not found: {path}")]
    NotFoundError { path: String },

    #[error("Malformed wordlist {path}, line {line}: {reason}")]
    FormatError {
        path: String,
        line: u64,
        reason: String,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgumentError { message: String },

    #[error("Invalid configuration value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PassgenError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PassgenError::NotFoundError { path } => {
                format!("Could not open the wordlist file '{}'", path)
            }
            PassgenError::FormatError { path, line, reason } => {
                format!("The wordlist '{}' is malformed at line {}: {}", path, line, reason)
            }
            PassgenError::InvalidArgumentError { message } => {
                format!("Invalid request: {}", message)
            }
            PassgenError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value {:?} for {}: {}", value, field, reason)
            }
            PassgenError::IoError(e) => format!("Could not read the wordlist: {}", e),
            PassgenError::CsvError(e) => format!("Could not parse the wordlist: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PassgenError::NotFoundError { .. } => {
                "Check the --source path, or run from the directory that contains wordlist.txt"
            }
            PassgenError::FormatError { .. } | PassgenError::CsvError(_) => {
                "Every wordlist line must be '<index><TAB><word>'"
            }
            PassgenError::InvalidArgumentError { .. } => {
                "Use a non-empty wordlist, or request fewer words"
            }
            PassgenError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
            PassgenError::IoError(_) => "Check that the wordlist file is readable",
        }
    }

    /// Process exit code for this error: 2 for bad arguments, 1 for anything
    /// touching the wordlist file.
    pub fn exit_code(&self) -> i32 {
        match self {
            PassgenError::InvalidArgumentError { .. }
            | PassgenError::InvalidConfigValueError { .. } => 2,
            PassgenError::NotFoundError { .. }
            | PassgenError::FormatError { .. }
            | PassgenError::IoError(_)
            | PassgenError::CsvError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PassgenError>;
