use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::{ViewerError, ViewerResult};

/// Suggested file name for exported snapshots
pub const DEFAULT_FILE_NAME: &str = "beam-visualizer.png";

/// One rendered frame of the viewport, RGBA8 rows from top to bottom
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CapturedFrame {
    /// Wrap raw pixels; `rgba` must hold exactly width * height * 4 bytes
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> ViewerResult<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(ViewerError::ImageEncode {
                reason: format!(
                    "frame {width}x{height} needs {expected} bytes, got {}",
                    rgba.len()
                ),
            });
        }
        Ok(Self { width, height, rgba })
    }
}

/// Encode a captured frame as PNG bytes
pub fn encode_png(frame: &CapturedFrame) -> ViewerResult<Vec<u8>> {
    let img = RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone()).ok_or_else(|| {
        ViewerError::ImageEncode {
            reason: format!(
                "pixel buffer does not match {}x{}",
                frame.width, frame.height
            ),
        }
    })?;

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| ViewerError::ImageEncode {
            reason: e.to_string(),
        })?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let frame = CapturedFrame::new(4, 3, vec![200; 4 * 3 * 4]).unwrap();
        let png = encode_png(&frame).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_decoded_size_matches_frame() {
        let frame = CapturedFrame::new(5, 2, vec![10; 5 * 2 * 4]).unwrap();
        let png = encode_png(&frame).unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn test_rejects_short_buffer() {
        assert!(matches!(
            CapturedFrame::new(4, 4, vec![0; 10]),
            Err(ViewerError::ImageEncode { .. })
        ));
        assert!(CapturedFrame::new(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn test_encode_mismatched_frame_fails() {
        let frame = CapturedFrame {
            width: 8,
            height: 8,
            rgba: vec![0; 16],
        };
        assert!(encode_png(&frame).is_err());
    }
}
