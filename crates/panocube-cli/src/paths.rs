//! Derivation of output paths from the input panorama path.
//!
//! Faces are written beside the input (or into an explicit output
//! directory), named by appending the face ordinal to the input's stem;
//! the atlas gets ordinal 6. `photo.jpg` becomes `photo0.png`..`photo5.png`
//! and `photo6.png`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use panocube::CubemapOutputs;

/// File extension for all outputs.
pub const OUTPUT_EXT: &str = "png";

/// Resolve the six face paths and the atlas path for an input panorama.
///
/// `out_dir` overrides the placement; otherwise outputs land beside the
/// input, or in the current directory when the path has no parent.
pub fn derive_outputs(
    input: &Path,
    out_dir: Option<&Path>,
    faces: bool,
    atlas: bool,
) -> Result<CubemapOutputs> {
    let stem = match input.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => bail!("input path '{}' has no file name", input.display()),
    };

    let dir: PathBuf = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => match input.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        },
    };

    let numbered = |i: usize| dir.join(format!("{stem}{i}.{OUTPUT_EXT}"));

    Ok(CubemapOutputs {
        faces: faces.then(|| (0..6).map(numbered).collect()),
        atlas: atlas.then(|| numbered(6)),
    })
}
