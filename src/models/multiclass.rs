use super::types::MaskPostprocessor;
use crate::error::Result;
use crate::mask::Mask;
use crate::reduce;
use crate::reshape::OutputReshaper;
use crate::tensor::{RawTensor, StructuredOutput};

/// Output channel count of the selfie multiclass model
pub const SELFIE_MULTICLASS_CHANNELS: usize = 6;

/// Per-pixel classes emitted by the selfie multiclass model
///
/// Channel order matches the network output; everything except
/// `Background` counts as foreground for matting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfieClass {
    Background = 0,
    Hair = 1,
    BodySkin = 2,
    FaceSkin = 3,
    Clothes = 4,
    /// Accessories and other person-attached regions
    Other = 5,
}

impl SelfieClass {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Background),
            1 => Some(Self::Hair),
            2 => Some(Self::BodySkin),
            3 => Some(Self::FaceSkin),
            4 => Some(Self::Clothes),
            5 => Some(Self::Other),
            _ => None,
        }
    }

    pub fn is_foreground(self) -> bool {
        self != Self::Background
    }
}

/// MediaPipe selfie multiclass segmentation (256x256, 6 classes)
///
/// Compared to single-channel matting this model segments hair, skin and
/// clothing separately, which holds up better with multiple people in frame
/// and full-body shots. Output shape is [1, 256, 256, 6] with per-pixel
/// class scores; the matte is the winning class's confidence, zeroed where
/// background wins, so edge gradients survive into compositing.
#[derive(Debug)]
pub struct SelfieMulticlass {
    reshaper: OutputReshaper,
}

impl SelfieMulticlass {
    pub fn new() -> Self {
        tracing::debug!("Using selfie multiclass postprocessor (6 classes)");
        Self {
            reshaper: OutputReshaper::new(SELFIE_MULTICLASS_CHANNELS),
        }
    }
}

impl Default for SelfieMulticlass {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskPostprocessor for SelfieMulticlass {
    fn expected_channels(&self) -> usize {
        self.reshaper.expected_channels()
    }

    fn structure<'a>(&self, tensor: &RawTensor<'a>) -> Result<StructuredOutput<'a>> {
        self.reshaper.reshape(tensor)
    }

    fn reduce_to_mask(&self, output: &StructuredOutput<'_>) -> Result<Mask> {
        reduce::argmax_foreground(output)
    }
}
