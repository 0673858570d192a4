//! End-to-end conversion tests: file outputs, determinism, and failure
//! scenarios that must leave zero output files behind.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use panocube::png::{write_rgba, PngConfig};
use panocube::{
    convert_file, decode_panorama, Color, ConvertError, ConvertOptions, CubemapOutputs,
    PixelBuffer,
};

/// Write a small synthetic panorama with distinct horizontal bands.
fn write_panorama(path: &Path, width: u32, height: u32) {
    let mut buffer = PixelBuffer::new(width, height, Color::black());
    for y in 0..height {
        for x in 0..width {
            buffer.set(
                x,
                y,
                Color::rgb(
                    x as f64 / (width - 1) as f64,
                    y as f64 / (height - 1) as f64,
                    0.5,
                ),
            );
        }
    }
    write_rgba(&buffer, path, &PngConfig::default()).unwrap();
}

fn face_paths(dir: &Path) -> Vec<PathBuf> {
    (0..6).map(|i| dir.join(format!("pano{i}.png"))).collect()
}

#[test]
fn test_convert_writes_six_faces_and_atlas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pano.png");
    write_panorama(&input, 64, 32);

    let outputs = CubemapOutputs {
        faces: Some(face_paths(dir.path())),
        atlas: Some(dir.path().join("pano6.png")),
    };
    let report = convert_file(&input, &outputs, &ConvertOptions::default()).unwrap();

    assert_eq!(report.source_width, 64);
    assert_eq!(report.source_height, 32);
    assert_eq!(report.face_size, 16);
    assert_eq!(report.files.len(), 7);

    for file in &report.files {
        assert!(file.path.exists(), "{} missing", file.path.display());
    }

    for path in face_paths(dir.path()) {
        let face = decode_panorama(&path).unwrap();
        assert_eq!((face.width, face.height), (16, 16));
    }

    let atlas = decode_panorama(&dir.path().join("pano6.png")).unwrap();
    assert_eq!((atlas.width, atlas.height), (64, 48));
}

#[test]
fn test_explicit_face_size_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pano.png");
    write_panorama(&input, 64, 32);

    let outputs = CubemapOutputs {
        faces: Some(face_paths(dir.path())),
        atlas: None,
    };
    let options = ConvertOptions {
        face_size: Some(8),
        ..Default::default()
    };
    let report = convert_file(&input, &outputs, &options).unwrap();

    assert_eq!(report.face_size, 8);
    let face = decode_panorama(&report.files[0].path).unwrap();
    assert_eq!((face.width, face.height), (8, 8));
}

#[test]
fn test_conversion_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pano.png");
    write_panorama(&input, 32, 16);

    let run = |subdir: &str| {
        let out = dir.path().join(subdir);
        std::fs::create_dir(&out).unwrap();
        let outputs = CubemapOutputs {
            faces: Some(face_paths(&out)),
            atlas: Some(out.join("pano6.png")),
        };
        convert_file(&input, &outputs, &ConvertOptions::default()).unwrap()
    };

    let first = run("a");
    let second = run("b");

    for (a, b) in first.files.iter().zip(&second.files) {
        assert_eq!(a.hash, b.hash, "{} hash differs between runs", a.target);
        let bytes_a = std::fs::read(&a.path).unwrap();
        let bytes_b = std::fs::read(&b.path).unwrap();
        assert_eq!(bytes_a, bytes_b, "{} bytes differ between runs", a.target);
    }
}

#[test]
fn test_atlas_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pano.png");
    write_panorama(&input, 32, 16);

    let outputs = CubemapOutputs {
        faces: None,
        atlas: Some(dir.path().join("atlas.png")),
    };
    let report = convert_file(&input, &outputs, &ConvertOptions::default()).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].target, "atlas");
    assert!(dir.path().join("atlas.png").exists());
}

#[test]
fn test_five_face_targets_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pano.png");
    write_panorama(&input, 32, 16);

    let mut paths = face_paths(dir.path());
    paths.pop();
    let outputs = CubemapOutputs {
        faces: Some(paths.clone()),
        atlas: None,
    };
    let err = convert_file(&input, &outputs, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::InvalidFaceCount(5)));
    for path in &paths {
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.png");

    let outputs = CubemapOutputs {
        faces: Some(face_paths(dir.path())),
        atlas: Some(dir.path().join("pano6.png")),
    };
    let err = convert_file(&input, &outputs, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::Decode(_)));
    for path in face_paths(dir.path()) {
        assert!(!path.exists());
    }
    assert!(!dir.path().join("pano6.png").exists());
}

#[test]
fn test_narrow_panorama_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("narrow.png");
    write_panorama(&input, 3, 2);

    let outputs = CubemapOutputs {
        faces: Some(face_paths(dir.path())),
        atlas: None,
    };
    let err = convert_file(&input, &outputs, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::InvalidFaceSize { .. }));
    for path in face_paths(dir.path()) {
        assert!(!path.exists());
    }
}
