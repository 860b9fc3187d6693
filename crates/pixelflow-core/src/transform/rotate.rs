//! Image rotation about the center with a fixed swapped output canvas.
//!
//! The output canvas is always `height x width` - the dimensions swap
//! regardless of the angle, including 0 and 180 degrees. That is the
//! editor's long-standing contract and callers depend on it, so it is kept
//! and tested rather than replaced with a bounding-box canvas.
//!
//! Exact multiples of 90 degrees use index-remapping fast paths. Any other
//! angle uses inverse mapping with bilinear sampling: for each pixel in the
//! output image, compute which source coordinates land on it and
//! interpolate. Output pixels with no source coverage are transparent.
//!
//! For rotation by angle θ (clockwise), the inverse transform is:
//! ```text
//! src_x = (dst_x - dst_cx) * cos(-θ) - (dst_y - dst_cy) * sin(-θ) + src_cx
//! src_y = (dst_x - dst_cx) * sin(-θ) + (dst_y - dst_cy) * cos(-θ) + src_cy
//! ```

use crate::RasterImage;

/// Fully transparent pixel used for uncovered output regions.
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Rotate an image clockwise about its center by whole degrees.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees, positive = clockwise;
///   any integer is accepted and reduced mod 360
///
/// # Returns
///
/// A new `RasterImage` of `height x width` (dimensions swapped
/// unconditionally). Regions of the canvas that no source pixel reaches
/// are transparent.
pub fn apply_rotation(image: &RasterImage, angle_degrees: i32) -> RasterImage {
    match angle_degrees.rem_euclid(360) {
        0 => composite_centered(image, false),
        90 => rotate_quarter_cw(image),
        180 => composite_centered(image, true),
        270 => rotate_quarter_ccw(image),
        angle => rotate_arbitrary(image, angle),
    }
}

/// Exact 90-degree clockwise rotation: source (x, y) lands at
/// (height-1-y, x) in the swapped canvas, covering it completely.
fn rotate_quarter_cw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let src_idx = (y * w + x) * 4;
            let dst_idx = (x * h + (h - 1 - y)) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: image.height,
        height: image.width,
        pixels: output,
    }
}

/// Exact 270-degree clockwise rotation: source (x, y) lands at
/// (y, width-1-x) in the swapped canvas.
fn rotate_quarter_ccw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let src_idx = (y * w + x) * 4;
            let dst_idx = ((w - 1 - x) * h + y) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: image.height,
        height: image.width,
        pixels: output,
    }
}

/// Composite the source centered into the swapped canvas without rotation
/// (angle 0) or flipped in both axes (angle 180).
///
/// Unless the image is square, part of the source is cropped and the
/// remaining canvas stays transparent - a direct consequence of the
/// unconditional dimension swap.
fn composite_centered(image: &RasterImage, flip: bool) -> RasterImage {
    let (w, h) = (image.width as i64, image.height as i64);
    let (out_w, out_h) = (h, w);
    let ox = (out_w - w).div_euclid(2);
    let oy = (out_h - h).div_euclid(2);

    let mut output = vec![0u8; (out_w * out_h * 4) as usize];

    for dy in 0..out_h {
        for dx in 0..out_w {
            let mut sx = dx - ox;
            let mut sy = dy - oy;
            if flip {
                sx = w - 1 - sx;
                sy = h - 1 - sy;
            }
            if sx < 0 || sx >= w || sy < 0 || sy >= h {
                continue;
            }
            let src_idx = ((sy * w + sx) * 4) as usize;
            let dst_idx = ((dy * out_w + dx) * 4) as usize;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: out_w as u32,
        height: out_h as u32,
        pixels: output,
    }
}

/// Rotate by an arbitrary angle via inverse mapping with bilinear sampling.
fn rotate_arbitrary(image: &RasterImage, angle_degrees: i32) -> RasterImage {
    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = (image.height, image.width);

    // Negate so that positive angles rotate clockwise on screen
    let angle_rad = -(angle_degrees as f64).to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Center of source and destination images
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 4) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let dst_idx = ((dst_y * dst_w + dst_x) * 4) as usize;
            let pixel = sample_bilinear(image, src_x, src_y);
            output[dst_idx..dst_idx + 4].copy_from_slice(&pixel);
        }
    }

    RasterImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

/// Get a pixel as [f64; 4] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RasterImage, px: usize, py: usize) -> [f64; 4] {
    let idx = (py * image.width as usize + px) * 4;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
        image.pixels[idx + 3] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixels and weights
/// their contribution based on distance. Coordinates outside the source
/// sample as transparent.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return TRANSPARENT;
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    // Bilinear interpolation formula
    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
