use crate::error::{PostprocessError, Result};
use ndarray::ArrayView3;

/// Borrowed view over one raw output tensor from the inference engine
///
/// The engine delivers a flat f32 buffer plus a BHWC shape descriptor
/// (batch, height, width, channels). The view lives only as long as the
/// frame's output buffer; nothing is copied or cached here.
///
/// Invariants enforced at construction:
/// - the shape has exactly 4 dimensions
/// - batch is 1 (single-frame inference)
/// - the buffer length equals the product of the dimensions
/// - the buffer is non-empty
#[derive(Debug, Clone, Copy)]
pub struct RawTensor<'a> {
    shape: [usize; 4],
    data: &'a [f32],
}

impl<'a> RawTensor<'a> {
    /// Wrap an engine output buffer, validating the shape contract
    ///
    /// # Arguments
    /// * `shape` - Declared dimensions in BHWC order
    /// * `data` - Flat buffer of `product(shape)` f32 values
    pub fn new(shape: &[usize], data: &'a [f32]) -> Result<Self> {
        if data.is_empty() {
            return Err(PostprocessError::EmptyTensor);
        }

        let dims: [usize; 4] =
            shape
                .try_into()
                .map_err(|_| PostprocessError::ShapeMismatch {
                    expected: "[batch, height, width, channels]".to_string(),
                    actual: format!("{shape:?}"),
                })?;

        if dims[0] != 1 {
            return Err(PostprocessError::ShapeMismatch {
                expected: "batch dimension 1".to_string(),
                actual: format!("{dims:?}"),
            });
        }

        let expected_len: usize = dims.iter().product();
        if data.len() != expected_len {
            return Err(PostprocessError::ShapeMismatch {
                expected: format!("{expected_len} values for shape {dims:?}"),
                actual: format!("{} values", data.len()),
            });
        }

        Ok(Self { shape: dims, data })
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn height(&self) -> usize {
        self.shape[1]
    }

    pub fn width(&self) -> usize {
        self.shape[2]
    }

    pub fn channels(&self) -> usize {
        self.shape[3]
    }

    pub fn data(&self) -> &'a [f32] {
        self.data
    }
}

/// Height × width grid of per-pixel channel-score vectors
///
/// A zero-copy reinterpretation of a [`RawTensor`]'s flat buffer with
/// row-major (height, width, channel) strides. Produced only by
/// [`crate::reshape::OutputReshaper`], which has already validated the
/// dimensions, so accessors here cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct StructuredOutput<'a> {
    scores: ArrayView3<'a, f32>,
    data: &'a [f32],
}

impl<'a> StructuredOutput<'a> {
    pub(crate) fn new(scores: ArrayView3<'a, f32>, data: &'a [f32]) -> Self {
        Self { scores, data }
    }

    pub fn height(&self) -> usize {
        self.scores.dim().0
    }

    pub fn width(&self) -> usize {
        self.scores.dim().1
    }

    pub fn channels(&self) -> usize {
        self.scores.dim().2
    }

    /// Per-pixel scores indexed as `[y, x, channel]`
    pub fn scores(&self) -> &ArrayView3<'a, f32> {
        &self.scores
    }

    /// The underlying flat buffer in HWC order
    ///
    /// Each pixel's channel scores are contiguous, which is what the
    /// reducers iterate over.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_buffer() {
        let err = RawTensor::new(&[1, 2, 2, 1], &[]).unwrap_err();
        assert_eq!(err, PostprocessError::EmptyTensor);
    }

    #[test]
    fn rejects_wrong_rank() {
        let data = vec![0.0f32; 4];
        let err = RawTensor::new(&[2, 2, 1], &data).unwrap_err();
        assert!(matches!(err, PostprocessError::ShapeMismatch { .. }));
    }

    #[test]
    fn rejects_batched_tensors() {
        let data = vec![0.0f32; 8];
        let err = RawTensor::new(&[2, 2, 2, 1], &data).unwrap_err();
        assert!(matches!(err, PostprocessError::ShapeMismatch { .. }));
    }

    #[test]
    fn rejects_length_mismatch() {
        let data = vec![0.0f32; 5];
        let err = RawTensor::new(&[1, 2, 2, 1], &data).unwrap_err();
        assert!(matches!(err, PostprocessError::ShapeMismatch { .. }));
    }

    #[test]
    fn exposes_dimensions() {
        let data = vec![0.0f32; 2 * 3 * 6];
        let tensor = RawTensor::new(&[1, 2, 3, 6], &data).unwrap();
        assert_eq!(tensor.height(), 2);
        assert_eq!(tensor.width(), 3);
        assert_eq!(tensor.channels(), 6);
        assert_eq!(tensor.data().len(), 36);
    }
}
