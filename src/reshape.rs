use crate::error::{PostprocessError, Result};
use crate::tensor::{RawTensor, StructuredOutput};
use ndarray::ArrayView3;

/// Reinterprets a raw output tensor as an H×W×C score grid
///
/// Purely a view change: no values are transformed or copied. The only job
/// here is validating that the tensor's declared channel count matches what
/// the model variant expects before handing the grid to a reducer.
#[derive(Debug, Clone, Copy)]
pub struct OutputReshaper {
    expected_channels: usize,
}

impl OutputReshaper {
    pub fn new(expected_channels: usize) -> Self {
        Self { expected_channels }
    }

    pub fn expected_channels(&self) -> usize {
        self.expected_channels
    }

    /// Reshape a flat BHWC tensor into a structured score grid
    ///
    /// Fails with `ShapeMismatch` if the channel dimension differs from the
    /// expected count; no partial output is produced.
    pub fn reshape<'a>(&self, tensor: &RawTensor<'a>) -> Result<StructuredOutput<'a>> {
        let [_, height, width, channels] = tensor.shape();

        if channels != self.expected_channels {
            return Err(PostprocessError::ShapeMismatch {
                expected: format!("[1, H, W, {}]", self.expected_channels),
                actual: format!("{:?}", tensor.shape()),
            });
        }

        // RawTensor has already checked buffer length against the shape, so
        // this view construction only fails on an internal inconsistency.
        let scores = ArrayView3::from_shape((height, width, channels), tensor.data()).map_err(
            |_| PostprocessError::ShapeMismatch {
                expected: format!("{} values", height * width * channels),
                actual: format!("{} values", tensor.data().len()),
            },
        )?;

        Ok(StructuredOutput::new(scores, tensor.data()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_mismatch_is_rejected() {
        let data = vec![0.0f32; 10 * 10 * 3];
        let tensor = RawTensor::new(&[1, 10, 10, 3], &data).unwrap();

        let err = OutputReshaper::new(6).reshape(&tensor).unwrap_err();
        assert!(matches!(err, PostprocessError::ShapeMismatch { .. }));
    }

    #[test]
    fn reshape_preserves_row_major_indexing() {
        // 2x2 pixels, 3 channels, values 0..12 in HWC order
        let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let tensor = RawTensor::new(&[1, 2, 2, 3], &data).unwrap();

        let structured = OutputReshaper::new(3).reshape(&tensor).unwrap();
        assert_eq!(structured.height(), 2);
        assert_eq!(structured.width(), 2);
        assert_eq!(structured.channels(), 3);

        // pixel (y=1, x=0), channel 2 -> offset (1*2 + 0)*3 + 2 = 8
        assert_eq!(structured.scores()[[1, 0, 2]], 8.0);
        // view is over the same memory, not a copy
        assert_eq!(structured.as_slice().as_ptr(), data.as_ptr());
    }
}
