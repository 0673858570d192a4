//! Cross-layout atlas compositing.
//!
//! Lays the six face images into one `4S x 3S` image shaped as an unfolded
//! cube:
//!
//! ```text
//! .  T  .  .
//! L  F  R  B
//! .  B  .  .
//! ```
//!
//! Uncovered corner regions are fully transparent.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::convert::{ConvertError, FaceImage};
use crate::face::Face;

/// Atlas slot for a face, in face-size units (column, row).
pub const fn atlas_slot(face: Face) -> (u32, u32) {
    match face {
        Face::Top => (1, 0),
        Face::Left => (0, 1),
        Face::Front => (1, 1),
        Face::Right => (2, 1),
        Face::Back => (3, 1),
        Face::Bottom => (1, 2),
    }
}

/// Compose six equal-size square face images into a cross atlas.
///
/// All six faces must be present and share identical dimensions; the result
/// is `4S x 3S` with a deterministic transparent background outside the
/// cross.
pub fn compose_cross(faces: &[FaceImage]) -> Result<PixelBuffer, ConvertError> {
    if faces.len() != 6 {
        return Err(ConvertError::InvalidFaceCount(faces.len()));
    }

    let size = faces[0].image.width;
    for face in faces {
        if face.image.width != size || face.image.height != size {
            return Err(ConvertError::FaceSizeMismatch {
                face: face.face,
                width: face.image.width,
                height: face.image.height,
                expected: size,
            });
        }
    }

    let mut atlas = PixelBuffer::new(4 * size, 3 * size, Color::transparent());

    for face in faces {
        let (col, row) = atlas_slot(face.face);
        let ox = col * size;
        let oy = row * size;
        for y in 0..size {
            for x in 0..size {
                atlas.set(ox + x, oy + y, face.image.get(x, y));
            }
        }
    }

    Ok(atlas)
}
