use std::path::Path;

use anyhow::{Context, bail};
use hs_core::entities::ArtifactFile;

/// Describe a local file the way a browser file picker would: base name,
/// byte size, and a MIME type guessed from the extension.
pub fn load_artifact(path: &Path) -> anyhow::Result<ArtifactFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read artifact at {}", path.display()))?;
    if !metadata.is_file() {
        bail!("artifact path {} is not a file", path.display());
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("artifact path {} has no file name", path.display()))?;
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(ArtifactFile::new(name, metadata.len(), mime_type))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::load_artifact;

    #[test]
    fn reads_name_size_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.mp4");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0_u8; 128]).unwrap();

        let artifact = load_artifact(&path).unwrap();
        assert_eq!(artifact.name, "demo.mp4");
        assert_eq!(artifact.size_bytes, 128);
        assert_eq!(artifact.mime_type, "video/mp4");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.hsx");
        std::fs::write(&path, b"data").unwrap();

        let artifact = load_artifact(&path).unwrap();
        assert_eq!(artifact.mime_type, "application/octet-stream");
    }

    #[test]
    fn csv_dataset_is_text_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, b"team,score\n").unwrap();

        assert_eq!(load_artifact(&path).unwrap().mime_type, "text/csv");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifact(&dir.path().join("nope.zip")).unwrap_err();
        assert!(err.to_string().contains("failed to read artifact"));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifact(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }
}
