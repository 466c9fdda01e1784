//! Input discovery and output naming.

use std::ffi::OsString;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use super::error::BatchError;
use super::types::InputFile;

/// Extension of accepted inputs, compared ignoring ASCII case.
pub const INPUT_EXTENSION: &str = "png";

/// Extension of written outputs.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Whether `path` has a `.png` extension in any letter case.
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(INPUT_EXTENSION))
        .unwrap_or(false)
}

/// Output file name for an input: the last extension replaced by `.webp`.
///
/// The stem is kept as raw OS bytes so distinct non-UTF-8 names stay distinct.
pub fn webp_target_name(input: &Path) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    name
}

/// Lists the PNG files directly inside `dir`, sorted by file name.
///
/// Only regular files are returned; symlinks are followed and entries that
/// cannot be inspected are skipped with a warning.
pub async fn list_png_inputs(dir: &Path) -> Result<Vec<InputFile>, BatchError> {
    let read_error = |source: std::io::Error| BatchError::InputDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_error)?;
    let mut inputs = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        let path = entry.path();
        if !has_png_extension(&path) {
            continue;
        }

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                debug!("Skipping {}: not a regular file", path.display());
                continue;
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        }

        inputs.push(InputFile {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
        });
    }

    // Duplicate detection depends on this order.
    inputs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_png_extension() {
        assert!(has_png_extension(Path::new("photo.png")));
        assert!(has_png_extension(Path::new("photo.PNG")));
        assert!(has_png_extension(Path::new("photo.Png")));
        assert!(has_png_extension(Path::new("archive.tar.png")));
        assert!(!has_png_extension(Path::new("photo.jpg")));
        assert!(!has_png_extension(Path::new("photo.png.bak")));
        assert!(!has_png_extension(Path::new("png")));
        assert!(!has_png_extension(Path::new(".png")));
    }

    #[test]
    fn test_webp_target_name() {
        assert_eq!(webp_target_name(Path::new("photo.png")), "photo.webp");
        assert_eq!(webp_target_name(Path::new("/x/icon.PNG")), "icon.webp");
        assert_eq!(webp_target_name(Path::new("v1.2.final.png")), "v1.2.final.webp");
        assert_eq!(webp_target_name(Path::new("with space.png")), "with space.webp");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_webp_target_name_keeps_non_utf8_stem() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let first = webp_target_name(Path::new(OsStr::from_bytes(b"\xff.png")));
        let second = webp_target_name(Path::new(OsStr::from_bytes(b"\xfe.png")));

        assert_eq!(first.as_bytes(), b"\xff.webp");
        assert_eq!(second.as_bytes(), b"\xfe.webp");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_list_png_inputs_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        for name in ["b.png", "a.PNG", "c.jpg", "notes.txt", "a.png", "Z.Png"] {
            fs::write(temp.path().join(name), b"x").await.unwrap();
        }
        fs::create_dir(temp.path().join("folder.png")).await.unwrap();

        let inputs = list_png_inputs(temp.path()).await.unwrap();
        let names: Vec<&str> = inputs.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["Z.Png", "a.PNG", "a.png", "b.png"]);
        assert_eq!(inputs[0].path, temp.path().join("Z.Png"));
    }

    #[tokio::test]
    async fn test_list_png_inputs_empty_dir() {
        let temp = TempDir::new().unwrap();
        let inputs = list_png_inputs(temp.path()).await.unwrap();
        assert!(inputs.is_empty());
    }

    #[tokio::test]
    async fn test_list_png_inputs_missing_dir() {
        let result = list_png_inputs(Path::new("/nonexistent/images")).await;
        assert!(matches!(result, Err(BatchError::InputDirectory { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_png_inputs_skips_broken_symlink() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.png"), b"x").await.unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.png"), temp.path().join("link.png"))
            .unwrap();

        let inputs = list_png_inputs(temp.path()).await.unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name, "real.png");
    }
}
