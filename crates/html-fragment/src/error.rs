use thiserror::Error;

/// Result type for fragment operations
pub type Result<T> = std::result::Result<T, FragmentError>;

/// Errors that can occur while building a fragment
#[derive(Error, Debug)]
pub enum FragmentError {
    /// The HTML grammar could not be loaded into the parser
    #[error("Language error: {0}")]
    Language(String),

    /// Tree-sitter gave up on the input
    #[error("Parse error: {0}")]
    Parse(String),

    /// A byte range does not fall on the fragment's character boundaries
    #[error("Invalid range: start={start}, end={end}")]
    InvalidRange { start: usize, end: usize },
}

impl FragmentError {
    /// Create a language error
    pub fn language(msg: impl Into<String>) -> Self {
        Self::Language(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
