use super::types::MaskPostprocessor;
use crate::error::Result;
use crate::mask::Mask;
use crate::reduce;
use crate::reshape::OutputReshaper;
use crate::tensor::{RawTensor, StructuredOutput};

/// Single-channel matting models (MODNet, SINet and similar)
///
/// These networks emit one sigmoid-activated channel per pixel that already
/// is the foreground probability, so reduction is a straight copy. No
/// re-normalization or clamping happens here.
#[derive(Debug)]
pub struct BinaryMatting {
    reshaper: OutputReshaper,
}

impl BinaryMatting {
    pub fn new() -> Self {
        tracing::debug!("Using single-channel matting postprocessor");
        Self {
            reshaper: OutputReshaper::new(1),
        }
    }
}

impl Default for BinaryMatting {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskPostprocessor for BinaryMatting {
    fn expected_channels(&self) -> usize {
        self.reshaper.expected_channels()
    }

    fn structure<'a>(&self, tensor: &RawTensor<'a>) -> Result<StructuredOutput<'a>> {
        self.reshaper.reshape(tensor)
    }

    fn reduce_to_mask(&self, output: &StructuredOutput<'_>) -> Result<Mask> {
        reduce::copy_single_channel(output)
    }
}
