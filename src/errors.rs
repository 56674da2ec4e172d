//! Custom error types for GeoJSON map generation

use std::fmt;
use std::io;

/// Errors raised while loading input, computing the view or writing the map
#[derive(Debug)]
pub enum GeoDeckError {
    /// Input file missing or unreadable
    InputFileError { path: String, source: io::Error },
    /// Malformed JSON/GeoJSON or a missing required member
    InputFormatError(String),
    /// No features where at least one is required
    EmptyInputError,
    /// Bounding box or surface size too small to derive a zoom level
    DegenerateBoundsError(String),
    /// Argument or configuration value out of range
    ConfigurationError(String),
    /// The output artifact could not be written
    OutputError { path: String, source: io::Error },
    /// Layer or view state could not be serialized
    RenderError(String),
}

impl fmt::Display for GeoDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoDeckError::InputFileError { path, source } => {
                write!(f, "Cannot read input file '{}': {}", path, source)
            }
            GeoDeckError::InputFormatError(msg) => write!(f, "Invalid input: {}", msg),
            GeoDeckError::EmptyInputError => write!(f, "Input contains no features"),
            GeoDeckError::DegenerateBoundsError(msg) => write!(f, "Degenerate bounds: {}", msg),
            GeoDeckError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            GeoDeckError::OutputError { path, source } => {
                write!(f, "Cannot write output file '{}': {}", path, source)
            }
            GeoDeckError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for GeoDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoDeckError::InputFileError { source, .. } => Some(source),
            GeoDeckError::OutputError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GeoDeckError {
    fn from(error: serde_json::Error) -> Self {
        GeoDeckError::RenderError(error.to_string())
    }
}

impl From<toml::de::Error> for GeoDeckError {
    fn from(error: toml::de::Error) -> Self {
        GeoDeckError::ConfigurationError(format!("Failed to parse TOML: {}", error))
    }
}

/// Result type for geodeck operations
pub type GeoDeckResult<T> = Result<T, GeoDeckError>;

impl GeoDeckError {
    /// Wrap an I/O error raised while reading `path`
    pub fn input_file(path: &str, source: io::Error) -> Self {
        GeoDeckError::InputFileError { path: path.to_string(), source }
    }

    /// Wrap an I/O error raised while writing `path`
    pub fn output(path: &str, source: io::Error) -> Self {
        GeoDeckError::OutputError { path: path.to_string(), source }
    }
}
