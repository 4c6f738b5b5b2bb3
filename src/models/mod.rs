mod binary;
mod multiclass;
pub mod types;

pub use binary::BinaryMatting;
pub use multiclass::{SelfieClass, SelfieMulticlass, SELFIE_MULTICLASS_CHANNELS};
pub use types::MaskPostprocessor;

use crate::error::{PostprocessError, Result};

/// Select the postprocessor matching a model's declared output channel count
///
/// Intended for startup-time validation when a model is loaded: the caller
/// reads the output shape signature from the loaded graph and resolves the
/// postprocessor once. An unknown channel count is a configuration error,
/// not a per-frame condition, and fails here rather than mid-stream.
pub fn postprocessor_for_channels(channels: usize) -> Result<Box<dyn MaskPostprocessor>> {
    match channels {
        1 => Ok(Box::new(BinaryMatting::new())),
        SELFIE_MULTICLASS_CHANNELS => Ok(Box::new(SelfieMulticlass::new())),
        other => Err(PostprocessError::UnsupportedChannelCount { channels: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_channel_counts_resolve() {
        assert_eq!(postprocessor_for_channels(1).unwrap().expected_channels(), 1);
        assert_eq!(postprocessor_for_channels(6).unwrap().expected_channels(), 6);
    }

    #[test]
    fn unknown_channel_count_is_a_config_error() {
        let err = postprocessor_for_channels(4).unwrap_err();
        assert_eq!(err, PostprocessError::UnsupportedChannelCount { channels: 4 });
    }
}
