//! Post-resample orientation correction.
//!
//! The projector maps destination rows to the horizontal plane axis, which
//! leaves the polar faces rotated a quarter turn relative to the four side
//! faces. The corrector squares them up so all six faces share one up-vector
//! convention.

use crate::buffer::PixelBuffer;
use crate::face::Face;

/// Rotate the resampled face image into the shared orientation convention.
///
/// Top is rotated 90 degrees clockwise, bottom 90 degrees counter-clockwise;
/// the side faces pass through unchanged. The input is always square (faces
/// are requested as `size x size`), so the rotation preserves dimensions.
pub fn correct_orientation(face: Face, img: PixelBuffer) -> PixelBuffer {
    match face {
        Face::Top => img.rotated_cw(),
        Face::Bottom => img.rotated_ccw(),
        _ => img,
    }
}
