//! Per-pixel color filters: grayscale, sepia, and box blur.
//!
//! All filters keep the image dimensions and pass the alpha channel
//! through unchanged. Grayscale uses the unweighted channel average
//! rather than perceptual luma; that is the editor's documented behavior,
//! not an oversight.

use crate::{FilterKind, RasterImage};

/// Apply a color filter to an image.
///
/// # Arguments
///
/// * `image` - Source image; never mutated
/// * `filter` - The filter sub-kind to apply
///
/// # Returns
///
/// A new `RasterImage` with identical dimensions and the filtered pixel
/// data. The alpha channel is copied through for every filter kind.
pub fn apply_filter(image: &RasterImage, filter: FilterKind) -> RasterImage {
    let pixels = match filter {
        FilterKind::Grayscale => {
            let mut pixels = image.pixels.clone();
            grayscale_in_place(&mut pixels);
            pixels
        }
        FilterKind::Sepia => {
            let mut pixels = image.pixels.clone();
            sepia_in_place(&mut pixels);
            pixels
        }
        FilterKind::Blur { radius } => box_blur(image, radius),
    };

    RasterImage {
        width: image.width,
        height: image.height,
        pixels,
    }
}

/// Replace each pixel's color channels with their unweighted average.
///
/// Integer division, matching `(R+G+B)/3` truncated toward zero.
fn grayscale_in_place(pixels: &mut [u8]) {
    for chunk in pixels.chunks_exact_mut(4) {
        let avg = ((chunk[0] as u16 + chunk[1] as u16 + chunk[2] as u16) / 3) as u8;
        chunk[0] = avg;
        chunk[1] = avg;
        chunk[2] = avg;
    }
}

/// Apply the fixed sepia tone matrix to each pixel.
///
/// Each output channel is clamped to [0, 255]; without the clamp, bright
/// pixels overflow the byte range and wrap into dark artifacts.
fn sepia_in_place(pixels: &mut [u8]) {
    for chunk in pixels.chunks_exact_mut(4) {
        let r = chunk[0] as f32;
        let g = chunk[1] as f32;
        let b = chunk[2] as f32;

        chunk[0] = tone(0.393 * r + 0.769 * g + 0.189 * b);
        chunk[1] = tone(0.349 * r + 0.686 * g + 0.168 * b);
        chunk[2] = tone(0.272 * r + 0.534 * g + 0.131 * b);
    }
}

#[inline]
fn tone(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Box blur: each output channel is the average of the source channel over
/// a `(2*radius+1)` square window, clipped to the image bounds.
///
/// Radius 0 degenerates to the identity window and returns a plain copy.
/// Alpha is taken from the center pixel, not averaged.
fn box_blur(image: &RasterImage, radius: u32) -> Vec<u8> {
    if radius == 0 {
        return image.pixels.clone();
    }

    let (w, h) = (image.width as i64, image.height as i64);
    let r = radius as i64;
    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for wy in (y - r).max(0)..=(y + r).min(h - 1) {
                for wx in (x - r).max(0)..=(x + r).min(w - 1) {
                    let idx = ((wy * w + wx) * 4) as usize;
                    sum[0] += image.pixels[idx] as u32;
                    sum[1] += image.pixels[idx + 1] as u32;
                    sum[2] += image.pixels[idx + 2] as u32;
                    count += 1;
                }
            }

            let idx = ((y * w + x) * 4) as usize;
            for c in 0..3 {
                output[idx + c] = (sum[c] as f32 / count as f32).round() as u8;
            }
            output[idx + 3] = image.pixels[idx + 3];
        }
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating small RGBA images with arbitrary content.
    fn image_strategy() -> impl Strategy<Value = RasterImage> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| RasterImage::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Grayscale output satisfies R==G==B==(R0+G0+B0)/3 with
        /// the alpha byte untouched, for every pixel.
        #[test]
        fn prop_grayscale_average(img in image_strategy()) {
            let result = apply_filter(&img, FilterKind::Grayscale);

            for (src, dst) in img.pixels.chunks_exact(4).zip(result.pixels.chunks_exact(4)) {
                let avg = ((src[0] as u16 + src[1] as u16 + src[2] as u16) / 3) as u8;
                prop_assert_eq!(dst[0], avg);
                prop_assert_eq!(dst[1], avg);
                prop_assert_eq!(dst[2], avg);
                prop_assert_eq!(dst[3], src[3]);
            }
        }

        /// Property: Sepia matches the tone matrix pre-clamp and never
        /// leaves the byte range.
        #[test]
        fn prop_sepia_matrix_with_clamp(img in image_strategy()) {
            let result = apply_filter(&img, FilterKind::Sepia);

            for (src, dst) in img.pixels.chunks_exact(4).zip(result.pixels.chunks_exact(4)) {
                let (r, g, b) = (src[0] as f32, src[1] as f32, src[2] as f32);
                let expect = [
                    (0.393 * r + 0.769 * g + 0.189 * b).clamp(0.0, 255.0).round() as u8,
                    (0.349 * r + 0.686 * g + 0.168 * b).clamp(0.0, 255.0).round() as u8,
                    (0.272 * r + 0.534 * g + 0.131 * b).clamp(0.0, 255.0).round() as u8,
                ];
                prop_assert_eq!(&dst[..3], &expect[..]);
                prop_assert_eq!(dst[3], src[3]);
            }
        }

        /// Property: Every filter keeps dimensions and buffer length.
        #[test]
        fn prop_filters_preserve_shape(img in image_strategy(), radius in 0u32..=4) {
            for filter in [
                FilterKind::Grayscale,
                FilterKind::Sepia,
                FilterKind::Blur { radius },
            ] {
                let result = apply_filter(&img, filter);
                prop_assert_eq!(result.width, img.width);
                prop_assert_eq!(result.height, img.height);
                prop_assert_eq!(
                    result.pixels.len(),
                    (img.width * img.height * 4) as usize
                );
            }
        }

        /// Property: Blur output channels stay within the min/max of the
        /// source channels (an average cannot overshoot).
        #[test]
        fn prop_blur_bounded_by_source(img in image_strategy(), radius in 1u32..=3) {
            let result = apply_filter(&img, FilterKind::Blur { radius });

            for c in 0..3usize {
                let lo = img.pixels.chunks_exact(4).map(|p| p[c]).min().unwrap();
                let hi = img.pixels.chunks_exact(4).map(|p| p[c]).max().unwrap();
                for dst in result.pixels.chunks_exact(4) {
                    prop_assert!(dst[c] >= lo && dst[c] <= hi);
                }
            }
        }
    }
}
