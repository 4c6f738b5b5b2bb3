//! Per-pixel channel reduction: score grids to confidence mattes.
//!
//! This is the hot path of the pipeline, run once per video frame. Both
//! reducers walk the flat HWC buffer in contiguous per-pixel channel slices
//! rather than indexing the grid pixel by pixel, which keeps the inner loop
//! autovectorizable and the cost at O(height * width * channels).

use crate::error::{PostprocessError, Result};
use crate::mask::Mask;
use crate::tensor::StructuredOutput;

/// Pass a single-channel output through as the matte
///
/// Single-channel matting models apply a sigmoid on the network side, so the
/// channel already holds foreground probability. Values are copied untouched;
/// anything outside [0, 1] is a downstream concern, not re-normalized here.
pub fn copy_single_channel(output: &StructuredOutput<'_>) -> Result<Mask> {
    if output.channels() != 1 {
        return Err(PostprocessError::ShapeMismatch {
            expected: "1 channel".to_string(),
            actual: format!("{} channels", output.channels()),
        });
    }

    Mask::from_vec(output.height(), output.width(), output.as_slice().to_vec())
}

/// Confidence-weighted foreground matte via per-pixel argmax
///
/// Channel 0 is background; channels 1.. are foreground sub-classes. Each
/// pixel takes the winning class's confidence, zeroed where background wins:
///
/// - `mask[p] = max score` when a foreground class has the maximum
/// - `mask[p] = 0.0` when background has the maximum
///
/// Keeping the winner's confidence instead of a hard 0/1 cutoff preserves
/// soft gradients at hair wisps and semi-transparent edges, which composite
/// much better than binary silhouettes.
///
/// Ties resolve to the lowest channel index (strict greater-than scan), so a
/// background/foreground tie stays background. This ordering is part of the
/// output contract and must not change.
pub fn argmax_foreground(output: &StructuredOutput<'_>) -> Result<Mask> {
    let channels = output.channels();
    if channels < 2 {
        return Err(PostprocessError::ShapeMismatch {
            expected: "2 or more channels".to_string(),
            actual: format!("{channels} channels"),
        });
    }

    let mut matte = Vec::with_capacity(output.height() * output.width());

    for pixel in output.as_slice().chunks_exact(channels) {
        let mut best = pixel[0];
        let mut winner = 0usize;
        for (class, &score) in pixel.iter().enumerate().skip(1) {
            if score > best {
                best = score;
                winner = class;
            }
        }
        matte.push(if winner > 0 { best } else { 0.0 });
    }

    Mask::from_vec(output.height(), output.width(), matte)
}
