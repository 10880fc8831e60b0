pub use minedown::{ColorParseError, MarkupError};

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, MarkupError>;
