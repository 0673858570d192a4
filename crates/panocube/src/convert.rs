//! Panorama-to-cubemap conversion driver.
//!
//! Validates the source and output targets, runs project -> resample ->
//! orient for each of the six faces in ordinal order, and encodes the
//! requested outputs. Per-face failures abort the remaining faces; files
//! already written stay on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::cross::compose_cross;
use crate::decode::{decode_panorama, DecodeError};
use crate::face::Face;
use crate::orient::correct_orientation;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};
use crate::project::project_face;
use crate::resample::resample;

/// Errors from a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The decoded source image has a zero dimension.
    #[error("source image is empty (decoded to zero size)")]
    SourceImageMissing,

    /// The face output target list does not have exactly six entries.
    #[error("expected 6 face output targets, got {0}")]
    InvalidFaceCount(usize),

    /// The derived or supplied face size is zero.
    #[error("face size must be at least 1 (got {size} for source width {src_width})")]
    InvalidFaceSize { src_width: u32, size: u32 },

    /// Compositor precondition: all six faces share identical dimensions.
    #[error(
        "face '{}' is {width}x{height}, expected {expected}x{expected}",
        .face.short_name()
    )]
    FaceSizeMismatch {
        face: Face,
        width: u32,
        height: u32,
        expected: u32,
    },

    /// The source file could not be read or decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An output file could not be encoded or written.
    #[error("failed to encode '{path}': {source}")]
    Encode { path: String, source: PngError },
}

/// Conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Face side length in pixels. Defaults to `source_width / 4`.
    pub face_size: Option<u32>,
    /// PNG encoding settings for written outputs.
    pub png: PngConfig,
}

/// One resampled, orientation-corrected cube face.
#[derive(Debug, Clone)]
pub struct FaceImage {
    /// Which face this is.
    pub face: Face,
    /// The face pixels (`size x size`).
    pub image: PixelBuffer,
}

/// The six faces of a converted cubemap, in ordinal order.
#[derive(Debug, Clone)]
pub struct CubemapResult {
    /// Face images in ordinal order (+X, -X, +Y, -Y, +Z, -Z).
    pub faces: Vec<FaceImage>,
    /// Side length shared by all six faces.
    pub face_size: u32,
}

impl CubemapResult {
    /// Compose the faces into a cross-layout atlas.
    pub fn atlas(&self) -> Result<PixelBuffer, ConvertError> {
        compose_cross(&self.faces)
    }
}

/// Output targets for a file-level conversion.
#[derive(Debug, Clone, Default)]
pub struct CubemapOutputs {
    /// Per-face output paths in ordinal order; must contain exactly six
    /// entries when present.
    pub faces: Option<Vec<PathBuf>>,
    /// Cross atlas output path.
    pub atlas: Option<PathBuf>,
}

/// One file written during a conversion.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    /// What the file holds: a face short name or "atlas".
    pub target: String,
    /// Where it was written.
    pub path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// BLAKE3 hash of the encoded PNG bytes.
    pub hash: String,
}

/// Summary of a completed file-level conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// Source panorama width in pixels.
    pub source_width: u32,
    /// Source panorama height in pixels.
    pub source_height: u32,
    /// Face side length used for this run.
    pub face_size: u32,
    /// Every file written, in write order.
    pub files: Vec<WrittenFile>,
}

/// Resolve the face size for a source width, applying the `width / 4`
/// default and rejecting degenerate sizes.
pub fn derive_face_size(src_width: u32, options: &ConvertOptions) -> Result<u32, ConvertError> {
    let size = match options.face_size {
        Some(size) => size,
        None => src_width / 4,
    };
    if size == 0 {
        return Err(ConvertError::InvalidFaceSize { src_width, size });
    }
    Ok(size)
}

/// Convert a decoded panorama into six face images.
///
/// Faces are produced in ordinal order, already orientation-corrected. The
/// source buffer is only read; each face image is owned by the result.
pub fn convert_panorama(
    source: &PixelBuffer,
    options: &ConvertOptions,
) -> Result<CubemapResult, ConvertError> {
    if source.is_empty() {
        return Err(ConvertError::SourceImageMissing);
    }
    let face_size = derive_face_size(source.width, options)?;

    let mut faces = Vec::with_capacity(6);
    for face in Face::all() {
        let map = project_face(source.width, source.height, face, face_size);
        let image = correct_orientation(face, resample(source, &map));
        faces.push(FaceImage { face, image });
    }

    Ok(CubemapResult { faces, face_size })
}

/// Convert a panorama file, writing the requested face and atlas PNGs.
///
/// Output targets are validated before the source is decoded, so an invalid
/// target list produces no files at all.
pub fn convert_file(
    input: &Path,
    outputs: &CubemapOutputs,
    options: &ConvertOptions,
) -> Result<ConvertReport, ConvertError> {
    if let Some(face_paths) = &outputs.faces {
        if face_paths.len() != 6 {
            return Err(ConvertError::InvalidFaceCount(face_paths.len()));
        }
    }

    let source = decode_panorama(input)?;
    if source.is_empty() {
        return Err(ConvertError::SourceImageMissing);
    }

    let result = convert_panorama(&source, options)?;
    let mut files = Vec::new();

    if let Some(face_paths) = &outputs.faces {
        for (face_image, path) in result.faces.iter().zip(face_paths) {
            let hash = encode_to(path, &face_image.image, &options.png)?;
            files.push(WrittenFile {
                target: face_image.face.short_name().to_string(),
                path: path.clone(),
                width: result.face_size,
                height: result.face_size,
                hash,
            });
        }
    }

    if let Some(atlas_path) = &outputs.atlas {
        let atlas = result.atlas()?;
        let hash = encode_to(atlas_path, &atlas, &options.png)?;
        files.push(WrittenFile {
            target: "atlas".to_string(),
            path: atlas_path.clone(),
            width: atlas.width,
            height: atlas.height,
            hash,
        });
    }

    Ok(ConvertReport {
        source_width: source.width,
        source_height: source.height,
        face_size: result.face_size,
        files,
    })
}

fn encode_to(path: &Path, buffer: &PixelBuffer, config: &PngConfig) -> Result<String, ConvertError> {
    let encode_err = |source| ConvertError::Encode {
        path: path.display().to_string(),
        source,
    };
    let (data, hash) = write_rgba_to_vec_with_hash(buffer, config).map_err(encode_err)?;
    std::fs::write(path, &data).map_err(|source| encode_err(PngError::Io(source)))?;
    Ok(hash)
}
