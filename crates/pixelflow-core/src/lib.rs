//! Pixelflow Core - Image processing library
//!
//! This crate provides the core processing functionality for Pixelflow's
//! node-based workflow editor: the image transform dispatcher (color
//! filters, resize, rotation), the image codec, node-type configuration
//! tables, and workflow persistence.

pub mod codec;
pub mod nodes;
pub mod raster;
pub mod transform;
pub mod workflow;

pub use raster::{RasterImage, ResampleFilter};
pub use transform::{apply_operation, TransformError};

use serde::{Deserialize, Serialize};

/// Color filter applied per pixel; output dimensions match the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum FilterKind {
    /// Unweighted channel average, `(R+G+B)/3` with integer division.
    Grayscale,
    /// Fixed sepia tone matrix with channel clamping.
    Sepia,
    /// Box blur over a `(2*radius+1)` square window. Radius 0 is the
    /// identity window.
    Blur { radius: u32 },
}

/// A single image operation requested by the editor.
///
/// This is the wire contract between the editor UI and the transform
/// dispatcher: a closed, tagged set of {kind, parameters} combinations.
/// New kinds are additive, backward-compatible extensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Apply a per-pixel color filter.
    Filter { filter: FilterKind },
    /// Uniform scale by percentage. 100 leaves the dimensions unchanged.
    Resize { scale_percent: f64 },
    /// Rotate clockwise about the image center by whole degrees.
    Rotate { angle_degrees: i32 },
}

impl Operation {
    /// Check whether this operation preserves the input dimensions.
    pub fn preserves_dimensions(&self) -> bool {
        matches!(self, Operation::Filter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_wire_shape_filter() {
        let op = Operation::Filter {
            filter: FilterKind::Sepia,
        };
        let json = serde_json::to_value(op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "filter", "filter": {"name": "sepia"}})
        );
    }

    #[test]
    fn test_operation_wire_shape_blur_radius() {
        let op = Operation::Filter {
            filter: FilterKind::Blur { radius: 3 },
        };
        let json = serde_json::to_value(op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "filter", "filter": {"name": "blur", "radius": 3}})
        );
    }

    #[test]
    fn test_operation_wire_shape_resize() {
        let op = Operation::Resize {
            scale_percent: 50.0,
        };
        let json = serde_json::to_value(op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "resize", "scale_percent": 50.0})
        );
    }

    #[test]
    fn test_operation_round_trip() {
        let ops = [
            Operation::Filter {
                filter: FilterKind::Grayscale,
            },
            Operation::Resize {
                scale_percent: 200.0,
            },
            Operation::Rotate { angle_degrees: 90 },
        ];
        for op in ops {
            let json = serde_json::to_string(&op).unwrap();
            let back: Operation = serde_json::from_str(&json).unwrap();
            assert_eq!(back, op);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<Operation, _> =
            serde_json::from_str(r#"{"kind": "emboss", "amount": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_filter_name_rejected() {
        let result: Result<Operation, _> =
            serde_json::from_str(r#"{"kind": "filter", "filter": {"name": "posterize"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_angle_rejected() {
        let result: Result<Operation, _> =
            serde_json::from_str(r#"{"kind": "rotate", "angle_degrees": 45.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_preserves_dimensions() {
        assert!(Operation::Filter {
            filter: FilterKind::Grayscale
        }
        .preserves_dimensions());
        assert!(!Operation::Resize {
            scale_percent: 100.0
        }
        .preserves_dimensions());
        assert!(!Operation::Rotate { angle_degrees: 0 }.preserves_dimensions());
    }
}
