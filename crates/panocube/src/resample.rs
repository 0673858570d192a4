//! Resampling of the panorama through a face coordinate map.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::project::CoordMap;

/// Border color for source coordinates that fall outside the panorama.
///
/// The projector guarantees in-range coordinates, so this only covers
/// floating rounding at the extremes. Opaque black, matching the constant
/// border of the original remap.
pub const BORDER: Color = Color::rgb(0.0, 0.0, 0.0);

/// Sample `src` through `map`, producing the face image.
///
/// Map entry `(row, col)` supplies the source coordinate for face pixel
/// `(x = col, y = row)`. Sampling is bilinear with a constant border.
pub fn resample(src: &PixelBuffer, map: &CoordMap) -> PixelBuffer {
    let size = map.size;
    let mut face = PixelBuffer::new(size, size, BORDER);

    for row in 0..size {
        for col in 0..size {
            let (sx, sy) = map.get(row, col);
            face.set(col, row, src.sample_border(sx, sy, BORDER));
        }
    }

    face
}
