//! mattekit: segmentation model output to foreground confidence matte.
//!
//! Converts the raw tensors an inference engine produces per video frame
//! into a single-channel matte (per-pixel foreground confidence in [0, 1])
//! that a compositor can use as alpha for background removal or replacement.
//!
//! The pipeline per frame:
//!
//! 1. Wrap the engine's flat output buffer in a [`RawTensor`] view
//! 2. [`OutputReshaper`] reinterprets it as an H×W×C score grid
//! 3. A model-specific reducer collapses the channels to a [`Mask`]
//!
//! Each supported network architecture implements [`MaskPostprocessor`];
//! [`postprocessor_for_channels`] resolves the right one from a loaded
//! model's output shape signature. The whole pipeline is pure and
//! frame-scoped: no I/O, no blocking, no state carried between frames.
//!
//! ```
//! use mattekit::{postprocessor_for_channels, RawTensor};
//!
//! # fn main() -> mattekit::Result<()> {
//! let postprocessor = postprocessor_for_channels(6)?;
//!
//! // One 6-channel pixel where the hair class wins at 0.9
//! let scores = [0.1, 0.9, 0.05, 0.05, 0.05, 0.05];
//! let tensor = RawTensor::new(&[1, 1, 1, 6], &scores)?;
//!
//! let mask = postprocessor.extract_mask(&tensor)?;
//! assert_eq!(mask.get(0, 0), 0.9);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mask;
pub mod models;
pub mod reduce;
pub mod reshape;
pub mod tensor;

pub use error::{PostprocessError, Result};
pub use mask::Mask;
pub use models::{
    postprocessor_for_channels, BinaryMatting, MaskPostprocessor, SelfieClass, SelfieMulticlass,
};
pub use reshape::OutputReshaper;
pub use tensor::{RawTensor, StructuredOutput};
