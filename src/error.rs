/// Error types that can occur while initializing network parameters
///
/// # Variants
///
/// - `InvalidArgument` - Indicates that a layer dimension or the hidden-layer sequence does not meet the requirements (zero width, empty sequence)
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidArgument(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}
