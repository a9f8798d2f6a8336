use thiserror::Error;

/// Errors raised while compositing a document into pages.
///
/// Every variant is deterministic: the same input always fails the same way,
/// so callers should report rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    #[error("Invalid decorator `{line}`: {reason}")]
    DecoratorSyntax { line: String, reason: String },

    #[error("Invalid aspect ratio `{0}`, expected the form `W:H` with non-zero parts")]
    InvalidAspectRatio(String),

    #[error("Aspect ratio, slide width and slide height cannot all be overridden at once")]
    OverconstrainedSlideSize,

    #[error("Option `{key}` expects {expected}, got `{found}`")]
    OptionType {
        key: String,
        expected: &'static str,
        found: String,
    },
}

pub type Result<T, E = CompositeError> = std::result::Result<T, E>;
