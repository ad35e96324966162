use std::path::PathBuf;

/// Result type alias for commons operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for commons operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Bit packing and byte codec errors
    #[error("codec error: {message}")]
    Codec { message: String },

    /// Archive (ZIP) errors
    #[error("archive error for '{path}': {message}")]
    Archive {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Markup (XML/HTML/RTF) parsing errors
    #[error("failed to parse {format} input: {message}")]
    Markup { format: String, message: String },

    /// Text and number parsing errors
    #[error("failed to parse '{input}': {message}")]
    Parse { input: String, message: String },

    /// Label registration conflicts
    #[error("label conflict for '{label}': {message}")]
    Label { label: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid argument passed to a helper
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// A wrapped error with caller-supplied context
    #[error("{message}")]
    Context { message: String },
}

// Conversion implementations
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a codec error
    #[must_use]
    pub fn codec(message: impl Into<String>) -> Self {
        Error::Codec {
            message: message.into(),
        }
    }

    /// Create an archive error
    #[must_use]
    pub fn archive(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Archive {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an archive error with a source error
    #[must_use]
    pub fn archive_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Archive {
            path: path.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a markup parsing error
    #[must_use]
    pub fn markup(format: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Markup {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create a text/number parsing error
    #[must_use]
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a label conflict error
    #[must_use]
    pub fn label(label: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Label {
            label: label.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Context {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Context {
                message: format!("{}: {}", f(), base_error),
            }
        })
    }
}
