use crate::error::{PostprocessError, Result};
use image::{imageops, ImageBuffer, Luma, RgbImage};

/// Per-pixel foreground confidence, 0.0 = background and 1.0 = foreground
///
/// Single-channel float grid in row-major order. This is the sole artifact
/// handed to the compositor, which uses it as the alpha when blending the
/// source frame over a replacement background. Frame-scoped: a new mask is
/// produced per frame and nothing is shared across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Mask {
    /// Build a mask from row-major confidence values
    pub fn from_vec(height: usize, width: usize, values: Vec<f32>) -> Result<Self> {
        if values.len() != height * width {
            return Err(PostprocessError::ShapeMismatch {
                expected: format!("{} values for a {height}x{width} mask", height * width),
                actual: format!("{} values", values.len()),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, y: usize, x: usize) -> f32 {
        self.values[y * self.width + x]
    }

    /// Row-major confidence values
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Resample the mask to the source frame's resolution
    ///
    /// Model output is usually smaller than the captured frame (e.g. 256x256
    /// vs 1280x720), so the matte is scaled up before compositing. Lanczos
    /// resampling overshoots near hard edges, so results are clamped back
    /// into [0, 1].
    pub fn resize(&self, target_width: usize, target_height: usize) -> Mask {
        let _span = tracing::debug_span!("mask_resize").entered();

        if self.width == target_width && self.height == target_height {
            return self.clone();
        }

        let float_image: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
                Luma([self.get(y as usize, x as usize)])
            });

        let resized = imageops::resize(
            &float_image,
            target_width as u32,
            target_height as u32,
            imageops::FilterType::Lanczos3,
        );

        let values: Vec<f32> = resized
            .into_raw()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0))
            .collect();

        Mask {
            width: target_width,
            height: target_height,
            values,
        }
    }

    /// Render the mask as a grayscale RGB image for visualization
    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let value = (self.get(y as usize, x as usize) * 255.0).clamp(0.0, 255.0) as u8;
            image::Rgb([value, value, value])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_dimensions() {
        let err = Mask::from_vec(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, PostprocessError::ShapeMismatch { .. }));
    }

    #[test]
    fn get_is_row_major() {
        let mask = Mask::from_vec(2, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
        assert_eq!(mask.get(0, 2), 0.2);
        assert_eq!(mask.get(1, 0), 0.3);
    }

    #[test]
    fn resize_to_same_dimensions_is_identity() {
        let mask = Mask::from_vec(2, 2, vec![0.0, 0.25, 0.5, 1.0]).unwrap();
        assert_eq!(mask.resize(2, 2), mask);
    }

    #[test]
    fn resize_keeps_values_in_range() {
        // A hard edge makes Lanczos overshoot without the clamp
        let mut values = vec![0.0f32; 8 * 8];
        for y in 0..8 {
            for x in 4..8 {
                values[y * 8 + x] = 1.0;
            }
        }
        let mask = Mask::from_vec(8, 8, values).unwrap();

        let resized = mask.resize(32, 32);
        assert_eq!(resized.width(), 32);
        assert_eq!(resized.height(), 32);
        assert!(resized.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn to_rgb_maps_confidence_to_gray() {
        let mask = Mask::from_vec(1, 2, vec![0.0, 1.0]).unwrap();
        let rgb = mask.to_rgb();
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &image::Rgb([255, 255, 255]));
    }
}
