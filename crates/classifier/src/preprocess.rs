//! Frame preprocessing for model input

use crate::ClassifierError;
use frame_source::VideoFrame;
use image::{ImageBuffer, Rgb};
use ndarray::Array4;

/// Fixed model input resolution (MobileNetV2-style, 224x224 RGB)
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Resize a frame to the model input resolution and scale pixel values
/// to [0,1], producing a NHWC (1, 224, 224, 3) tensor.
pub fn preprocess_frame(frame: &VideoFrame) -> Result<Array4<f32>, ClassifierError> {
    let img = ImageBuffer::<Rgb<u8>, _>::from_raw(frame.width, frame.height, frame.data.as_slice())
        .ok_or_else(|| {
            ClassifierError::ImageProcessing("frame buffer does not match dimensions".to_string())
        })?;

    let resized = image::imageops::resize(
        &img,
        MODEL_INPUT_SIZE,
        MODEL_INPUT_SIZE,
        image::imageops::FilterType::Triangle,
    );

    let size = MODEL_INPUT_SIZE as usize;
    let mut input = Array4::<f32>::zeros((1, size, size, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        input[[0, y as usize, x as usize, 0]] = pixel[0] as f32 / 255.0;
        input[[0, y as usize, x as usize, 1]] = pixel[1] as f32 / 255.0;
        input[[0, y as usize, x as usize, 2]] = pixel[2] as f32 / 255.0;
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_shape_and_range() {
        let frame = VideoFrame::new(vec![255; 64 * 48 * 3], 64, 48, 0, 0);
        let tensor = preprocess_frame(&frame).unwrap();

        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_preprocess_scales_values() {
        let frame = VideoFrame::new(vec![51; 224 * 224 * 3], 224, 224, 0, 0);
        let tensor = preprocess_frame(&frame).unwrap();
        assert!((tensor[[0, 100, 100, 1]] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_preprocess_rejects_short_buffer() {
        let frame = VideoFrame::new(vec![0; 10], 64, 48, 0, 0);
        assert!(matches!(
            preprocess_frame(&frame),
            Err(ClassifierError::ImageProcessing(_))
        ));
    }
}
