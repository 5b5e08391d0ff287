use thiserror::Error;

/// Failure of a single model query.
///
/// `Launch` and `Exit` make up the execution failures (see
/// [`QueryError::is_execution`]); `Parse` covers output that does not fit the
/// seven-field record.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Could not launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}: {}", describe_code(.code), describe_stderr(.stderr))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Could not parse model output line '{line}': {issue}")]
    Parse {
        line: String,
        #[source]
        issue: ParseIssue,
    },
}

impl QueryError {
    /// True when the external tool could not be run or exited non-zero.
    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Launch { .. } | Self::Exit { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> &str {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "no diagnostic output"
    } else {
        trimmed
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    #[error("output is not valid UTF-8")]
    NotUtf8,

    #[error("no output")]
    EmptyOutput,

    #[error("expected a single line, found {0}")]
    UnexpectedLines(usize),

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },
}

#[cfg(feature = "cli")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not initialize logging: {source}")]
    InitLogging {
        #[source]
        source: log::SetLoggerError,
    },
}
