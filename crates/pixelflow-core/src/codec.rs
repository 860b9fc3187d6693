//! Image decode/encode collaborator for the transform pipeline.
//!
//! The transform dispatcher only ever sees decoded RGBA buffers; this
//! module is the boundary that turns container formats into those buffers
//! and back. PNG is the working format (lossless, keeps alpha); JPEG is
//! offered for export and flattens alpha.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use image::ImageReader;
use thiserror::Error;

use crate::RasterImage;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Errors that can occur during image encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Decode an image from container bytes (PNG or JPEG) into an RGBA raster.
///
/// The format is guessed from the content, not from a file name.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be guessed,
/// or `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}

/// Encode an RGBA raster to PNG bytes.
///
/// PNG is lossless and keeps the alpha channel, so
/// decode(encode_png(image)) reproduces the input exactly.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for zero-sized images,
/// `EncodeError::InvalidPixelData` if the buffer length does not match the
/// dimensions, or `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    validate_for_encode(image)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an RGBA raster to JPEG bytes with the given quality (1-100).
///
/// JPEG has no alpha channel; the alpha byte is dropped during conversion
/// to RGB. Quality is clamped to the valid range.
///
/// # Errors
///
/// Same failure modes as [`encode_png`].
pub fn encode_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate_for_encode(image)?;

    let rgba = image
        .to_rgba_image()
        .ok_or(EncodeError::InvalidPixelData {
            expected: (image.width as usize) * (image.height as usize) * 4,
            actual: image.pixels.len(),
        })?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).into_rgb8();

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            rgb.as_raw(),
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn validate_for_encode(image: &RasterImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(if (x + y) % 2 == 0 { 255 } else { 70 });
            }
        }
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_png_round_trip_exact() {
        let img = create_test_image(16, 9);
        let bytes = encode_png(&img).unwrap();
        let decoded = decode_image(&bytes).unwrap();

        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.height, 9);
        assert_eq!(decoded.pixels, img.pixels);
    }

    #[test]
    fn test_png_magic_bytes() {
        let img = create_test_image(4, 4);
        let bytes = encode_png(&img).unwrap();

        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_jpeg_magic_bytes() {
        let img = create_test_image(8, 8);
        let bytes = encode_jpeg(&img, 90).unwrap();

        // SOI marker at the start, EOI at the end
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_jpeg_decodes_with_matching_dimensions() {
        let img = create_test_image(20, 10);
        let bytes = encode_jpeg(&img, 95).unwrap();
        let decoded = decode_image(&bytes).unwrap();

        // Lossy, so only dimensions are guaranteed
        assert_eq!(decoded.width, 20);
        assert_eq!(decoded.height, 10);
    }

    #[test]
    fn test_jpeg_quality_clamping() {
        let img = create_test_image(10, 10);
        assert!(encode_jpeg(&img, 0).is_ok());
        assert!(encode_jpeg(&img, 255).is_ok());
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = create_test_image(8, 8);
        let bytes = encode_png(&img).unwrap();

        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_encode_zero_dimensions_error() {
        let img = RasterImage::new(0, 0, vec![]);
        assert!(matches!(
            encode_png(&img),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_buffer_mismatch_error() {
        let img = RasterImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 30],
        };
        assert!(matches!(
            encode_png(&img),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }
}
