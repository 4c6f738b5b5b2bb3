use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PostprocessError>;

/// Failures surfaced by the per-frame post-processing pipeline
///
/// All failures are reported to the caller; nothing is logged-and-swallowed
/// and nothing panics. Skip-frame vs. abort policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostprocessError {
    /// Declared tensor shape does not match what the model variant expects.
    /// Non-recoverable for the frame; the caller should drop it.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Zero-length output buffer from the inference engine. Usually a
    /// transient engine hiccup; the caller may simply wait for the next frame.
    #[error("empty output tensor (zero-length data buffer)")]
    EmptyTensor,

    /// No postprocessor is registered for this output channel count.
    /// A configuration error, caught at model-load time rather than per frame.
    #[error("no mask postprocessor registered for {channels}-channel output")]
    UnsupportedChannelCount { channels: usize },
}
