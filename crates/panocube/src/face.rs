//! Cube face identification and the fixed projection geometry table.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Identifies one face of the cubemap.
///
/// The ordinal order (+X, -X, +Y, -Y, +Z, -Z) matches the GL/KTX cubemap
/// face order and is part of the output contract: face `i` is written to the
/// output target at index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Face {
    /// +X face (right)
    Right = 0,
    /// -X face (left)
    Left = 1,
    /// +Y face (top)
    Top = 2,
    /// -Y face (bottom)
    Bottom = 3,
    /// +Z face (front)
    Front = 4,
    /// -Z face (back)
    Back = 5,
}

impl Face {
    /// Returns all six faces in ordinal order.
    pub const fn all() -> [Face; 6] {
        [
            Face::Right,
            Face::Left,
            Face::Top,
            Face::Bottom,
            Face::Front,
            Face::Back,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<Face> {
        match index {
            0 => Some(Face::Right),
            1 => Some(Face::Left),
            2 => Some(Face::Top),
            3 => Some(Face::Bottom),
            4 => Some(Face::Front),
            5 => Some(Face::Back),
            _ => None,
        }
    }

    /// Returns a short name for the face (e.g., "right", "top").
    pub const fn short_name(self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Left => "left",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Front => "front",
            Face::Back => "back",
        }
    }

    /// Yaw offset of the face center from the forward (+Z) axis, in radians.
    pub fn yaw_offset(self) -> f64 {
        match self {
            Face::Right => PI / 2.0,
            Face::Left => -PI / 2.0,
            Face::Top => 0.0,
            Face::Bottom => 0.0,
            Face::Front => 0.0,
            Face::Back => PI,
        }
    }

    /// Projection strategy for this face.
    pub fn kind(self) -> FaceKind {
        match self {
            Face::Top => FaceKind::Top,
            Face::Bottom => FaceKind::Bottom,
            side => FaceKind::Side {
                yaw: side.yaw_offset(),
            },
        }
    }
}

/// The three projection strategies used by the face projector.
///
/// The four side faces share one formula parameterized by yaw; the top and
/// bottom faces use polar branches of opposite pitch sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceKind {
    /// One of the four side faces, at the given yaw offset.
    Side { yaw: f64 },
    /// The +Y face (negative pitch branch).
    Top,
    /// The -Y face (positive pitch branch).
    Bottom,
}
