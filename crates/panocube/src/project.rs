//! Inverse equirectangular projection for a single cube face.
//!
//! For every destination pixel of a face, computes the fractional source
//! pixel in the panorama to sample from. Angles are seeded from the fixed
//! per-face geometry table; the side faces share one formula parameterized
//! by yaw while the top and bottom faces use polar branches.

use std::f64::consts::PI;

use crate::face::{Face, FaceKind};

/// Dense destination-to-source coordinate map for one cube face.
///
/// Entries are indexed by destination `(row, col)` with `row` mapping to the
/// horizontal plane axis and `col` to the vertical one. The swap is what
/// gives the side faces their upright orientation; the top and bottom faces
/// are squared up afterwards by the orientation corrector.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordMap {
    /// Face side length in pixels.
    pub size: u32,
    /// Source x coordinate per destination pixel (row-major).
    pub src_x: Vec<f64>,
    /// Source y coordinate per destination pixel (row-major).
    pub src_y: Vec<f64>,
}

impl CoordMap {
    fn with_size(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            src_x: vec![0.0; len],
            src_y: vec![0.0; len],
        }
    }

    /// Source coordinate for the destination pixel at `(row, col)`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> (f64, f64) {
        let idx = (row as usize) * (self.size as usize) + col as usize;
        (self.src_x[idx], self.src_y[idx])
    }

    #[inline]
    fn set(&mut self, row: u32, col: u32, x: f64, y: f64) {
        let idx = (row as usize) * (self.size as usize) + col as usize;
        self.src_x[idx] = x;
        self.src_y[idx] = y;
    }
}

/// Build the coordinate map for one face.
///
/// `src_width`/`src_height` are the panorama dimensions; `size` is the face
/// side length. The caller guarantees `size > 0` and a non-empty source
/// (enforced by the assembler before projection starts). Every produced
/// coordinate lies within `[0, src_width-1] x [0, src_height-1]` up to
/// floating rounding.
pub fn project_face(src_width: u32, src_height: u32, face: Face, size: u32) -> CoordMap {
    let in_w = src_width as f64;
    let in_h = src_height as f64;
    let s = size as f64;

    // Opposite and adjacent legs of the triangle spanned from the sphere
    // center to the cube face (unit sphere circumscribing the cube).
    let an = (PI / 4.0).sin();
    let ak = (PI / 4.0).cos();

    let kind = face.kind();
    let mut map = CoordMap::with_size(size);

    for row in 0..size {
        for col in 0..size {
            // Destination pixel to [-an, an] plane coordinates. Row drives
            // the horizontal plane axis, column the vertical one.
            let nx = (row as f64 / s - 0.5) * 2.0 * an;
            let ny = (col as f64 / s - 0.5) * 2.0 * an;

            // Project from the face plane onto the sphere surface.
            let (mut u, mut v) = match kind {
                FaceKind::Side { yaw } => {
                    let u = nx.atan2(ak);
                    let v = (ny * u.cos()).atan2(ak);
                    (u + yaw, v)
                }
                FaceKind::Bottom => {
                    let d = nx.hypot(ny);
                    (ny.atan2(nx), PI / 2.0 - d.atan2(ak))
                }
                FaceKind::Top => {
                    let d = nx.hypot(ny);
                    ((-ny).atan2(nx), -PI / 2.0 + d.atan2(ak))
                }
            };

            // Normalize longitude to [-1, 1] over a full turn and latitude
            // to [-1, 1] over half a turn.
            u /= PI;
            v /= PI / 2.0;

            // Passing over a pole flips to the opposite meridian.
            while v < -1.0 {
                v += 2.0;
                u += 1.0;
            }
            while v > 1.0 {
                v -= 2.0;
                u += 1.0;
            }

            // Longitude wraparound, modulo 2.
            while u < -1.0 {
                u += 2.0;
            }
            while u > 1.0 {
                u -= 2.0;
            }

            // Map to source pixel space.
            let x = (u / 2.0 + 0.5) * (in_w - 1.0);
            let y = (v / 2.0 + 0.5) * (in_h - 1.0);

            map.set(row, col, x, y);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 64;
    const H: u32 = 32;
    const S: u32 = 16;

    #[test]
    fn coordinates_stay_inside_source_for_all_faces() {
        for face in Face::all() {
            let map = project_face(W, H, face, S);
            for row in 0..S {
                for col in 0..S {
                    let (x, y) = map.get(row, col);
                    assert!(
                        (-1e-9..=(W - 1) as f64 + 1e-9).contains(&x),
                        "{}: x out of range at ({row},{col}): {x}",
                        face.short_name()
                    );
                    assert!(
                        (-1e-9..=(H - 1) as f64 + 1e-9).contains(&y),
                        "{}: y out of range at ({row},{col}): {y}",
                        face.short_name()
                    );
                }
            }
        }
    }

    #[test]
    fn front_center_maps_to_panorama_center() {
        let map = project_face(W, H, Face::Front, S);
        let (x, y) = map.get(S / 2, S / 2);
        assert!((x - (W - 1) as f64 / 2.0).abs() < 1e-9, "x = {x}");
        assert!((y - (H - 1) as f64 / 2.0).abs() < 1e-9, "y = {y}");
    }

    #[test]
    fn back_center_is_half_a_panorama_away_from_front_center() {
        let front = project_face(W, H, Face::Front, S);
        let back = project_face(W, H, Face::Back, S);
        let (fx, _) = front.get(S / 2, S / 2);
        let (bx, _) = back.get(S / 2, S / 2);

        // Half the panorama width, modulo the width.
        let half = (W - 1) as f64 / 2.0;
        let dist = (bx - fx).abs().min((W - 1) as f64 - (bx - fx).abs());
        assert!((dist - half).abs() < 1e-9, "front {fx}, back {bx}");
    }

    #[test]
    fn side_face_centers_line_up_on_the_equator() {
        for face in [Face::Right, Face::Left, Face::Front, Face::Back] {
            let map = project_face(W, H, face, S);
            let (_, y) = map.get(S / 2, S / 2);
            assert!(
                (y - (H - 1) as f64 / 2.0).abs() < 1e-9,
                "{}: equator y = {y}",
                face.short_name()
            );
        }
    }

    #[test]
    fn top_and_bottom_centers_hit_the_poles() {
        let top = project_face(W, H, Face::Top, S);
        let (_, y) = top.get(S / 2, S / 2);
        assert!(y.abs() < 1e-9, "top pole y = {y}");

        let bottom = project_face(W, H, Face::Bottom, S);
        let (_, y) = bottom.get(S / 2, S / 2);
        assert!((y - (H - 1) as f64).abs() < 1e-9, "bottom pole y = {y}");
    }

    #[test]
    fn projection_is_deterministic() {
        for face in Face::all() {
            let a = project_face(W, H, face, S);
            let b = project_face(W, H, face, S);
            assert_eq!(a, b, "{}", face.short_name());
        }
    }
}
