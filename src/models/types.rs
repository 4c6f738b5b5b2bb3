use crate::error::Result;
use crate::mask::Mask;
use crate::tensor::{RawTensor, StructuredOutput};

/// Post-processing contract implemented per model variant
///
/// Each supported network architecture supplies its own {structure, reduce}
/// pair while the shared infrastructure (shape validation, zero-copy
/// reinterpretation) stays in [`crate::reshape::OutputReshaper`]. Adding a
/// future variant (say, a 3-class model) means implementing this trait, not
/// modifying the reducers that ship today.
pub trait MaskPostprocessor: std::fmt::Debug {
    /// Channel count this variant expects in the network output
    fn expected_channels(&self) -> usize;

    /// Reinterpret a raw output tensor as an H×W×C score grid
    fn structure<'a>(&self, tensor: &RawTensor<'a>) -> Result<StructuredOutput<'a>>;

    /// Reduce a score grid to a single-channel confidence matte
    fn reduce_to_mask(&self, output: &StructuredOutput<'_>) -> Result<Mask>;

    /// Per-frame entry point: structure the tensor, then reduce it
    ///
    /// Either a complete matte comes back or the frame fails with an explicit
    /// error; a partial matte is never emitted. The call is pure and
    /// run-to-completion, with no state shared between frames, so it is safe
    /// to invoke from whichever processing thread owns the frame.
    fn extract_mask(&self, tensor: &RawTensor<'_>) -> Result<Mask> {
        let _span = tracing::debug_span!("extract_mask").entered();

        let structured = self.structure(tensor)?;
        self.reduce_to_mask(&structured)
    }
}
