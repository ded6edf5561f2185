use std::fmt;
use std::path::PathBuf;

/// Error type for context switching
#[derive(Debug)]
pub enum CtxError {
    /// Wrong argument count or invalid flags
    Usage(String),
    /// Input file does not exist
    NotFound(PathBuf),
    /// File exists but could not be read
    Read { path: PathBuf, message: String },
    /// File is not valid YAML or does not match the expected shape
    Parse { path: PathBuf, message: String },
    /// Host key is absent from the context store
    HostNotFound(String),
    /// No complete context with the requested name
    InvalidContext { host: String, name: String },
    /// glab configuration lacks a required mapping
    MissingKey(String),
    /// Serializing or writing the glab configuration failed
    Write { path: PathBuf, message: String },
    /// Path resolution or directory creation failed
    Config(String),
}

impl fmt::Display for CtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtxError::Usage(msg) => write!(f, "Usage error: {}", msg),
            CtxError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            CtxError::Read { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
            CtxError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            CtxError::HostNotFound(host) => write!(f, "Host '{}' not found", host),
            CtxError::InvalidContext { host, name } => {
                write!(f, "Invalid context '{}' for host '{}'", name, host)
            }
            CtxError::MissingKey(key) => write!(f, "Missing key: {}", key),
            CtxError::Write { path, message } => {
                write!(f, "Failed to write {}: {}", path.display(), message)
            }
            CtxError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CtxError {}

impl CtxError {
    /// Step of the switch that produced this error, for log lines
    pub fn operation(&self) -> &'static str {
        match self {
            CtxError::Usage(_) => "parse arguments",
            CtxError::NotFound(_) | CtxError::Read { .. } | CtxError::Parse { .. } => {
                "load config file"
            }
            CtxError::HostNotFound(_) => "select host",
            CtxError::InvalidContext { .. } => "select host context",
            CtxError::MissingKey(_) => "patch glab config",
            CtxError::Write { .. } => "write glab config",
            CtxError::Config(_) => "prepare config directories",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CtxError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<clap::Error> for CtxError {
    /// Keeps only the message block of clap's output, folded onto one line.
    /// The trailing usage and help hints are dropped.
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        let message = message.strip_prefix("error: ").unwrap_or(&message);
        CtxError::Usage(message.to_string())
    }
}

/// Result type alias for context operations
pub type Result<T> = std::result::Result<T, CtxError>;
