//! Equirectangular panorama to cubemap conversion.
//!
//! This crate converts a single equirectangular (spherical) panorama into
//! the six square faces of a cubemap, in the GL/KTX face order
//! (+X, -X, +Y, -Y, +Z, -Z), and can lay the faces out into one cross-shaped
//! atlas image.
//!
//! # Pipeline
//!
//! For every destination pixel of a face, the projector computes the
//! fractional source pixel in the panorama; the resampler samples the source
//! through that map with bilinear interpolation; the orientation corrector
//! rotates the polar faces into the shared up-vector convention; the cross
//! compositor assembles the atlas.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use panocube::{convert_file, ConvertOptions, CubemapOutputs};
//!
//! let outputs = CubemapOutputs {
//!     faces: Some((0..6).map(|i| PathBuf::from(format!("pano{i}.png"))).collect()),
//!     atlas: Some(PathBuf::from("pano6.png")),
//! };
//! let report = convert_file("pano.jpg".as_ref(), &outputs, &ConvertOptions::default())?;
//! for file in &report.files {
//!     println!("{} -> {}", file.target, file.path.display());
//! }
//! # Ok::<(), panocube::ConvertError>(())
//! ```
//!
//! # Determinism
//!
//! Conversion has no random or time-dependent inputs, and PNG encoding uses
//! fixed compression settings, so the same panorama and options always
//! produce byte-identical outputs. Each written file's BLAKE3 hash is
//! reported alongside its path.

pub mod buffer;
pub mod color;
pub mod convert;
pub mod cross;
pub mod decode;
pub mod face;
pub mod orient;
pub mod png;
pub mod project;
pub mod resample;

// Re-export main types for convenience
pub use buffer::PixelBuffer;
pub use color::Color;
pub use convert::{
    convert_file, convert_panorama, derive_face_size, ConvertError, ConvertOptions, ConvertReport,
    CubemapOutputs, CubemapResult, FaceImage, WrittenFile,
};
pub use cross::{atlas_slot, compose_cross};
pub use decode::{decode_panorama, DecodeError};
pub use face::{Face, FaceKind};
pub use orient::correct_orientation;
pub use png::{PngConfig, PngError};
pub use project::{project_face, CoordMap};
pub use resample::resample;
