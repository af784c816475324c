//! File slot validators: project archive, demo video, dataset.

use hs_core::entities::ArtifactFile;

use crate::{MIB, Violation};

/// Largest accepted project archive.
pub const PROJECT_FILE_MAX_BYTES: u64 = 100 * MIB;

/// Largest accepted demo video.
pub const DEMO_VIDEO_MAX_BYTES: u64 = 500 * MIB;

/// Largest accepted dataset.
pub const DATASET_MAX_BYTES: u64 = 50 * MIB;

fn check_size(file: &ArtifactFile, limit: u64) -> Result<(), Violation> {
    if file.size_bytes > limit {
        return Err(Violation::TooLarge {
            limit_mib: limit / MIB,
        });
    }
    Ok(())
}

/// Validate a project archive.
///
/// # Errors
///
/// [`Violation::TooLarge`] above 100 MiB.
pub fn validate_project_file(file: &ArtifactFile) -> Result<(), Violation> {
    check_size(file, PROJECT_FILE_MAX_BYTES)
}

/// Validate a demo video. Size is checked before type.
///
/// # Errors
///
/// [`Violation::TooLarge`] above 500 MiB, [`Violation::WrongType`] when the MIME
/// type is not `video/*`.
pub fn validate_demo_video(file: &ArtifactFile) -> Result<(), Violation> {
    check_size(file, DEMO_VIDEO_MAX_BYTES)?;
    if !file.mime_type.starts_with("video/") {
        return Err(Violation::WrongType {
            expected: "video/*",
        });
    }
    Ok(())
}

/// Validate a dataset. Size is checked before type.
///
/// # Errors
///
/// [`Violation::TooLarge`] above 50 MiB, [`Violation::WrongType`] when the file
/// name does not end in `.csv` (any case).
pub fn validate_dataset(file: &ArtifactFile) -> Result<(), Violation> {
    check_size(file, DATASET_MAX_BYTES)?;
    if !file.name.to_ascii_lowercase().ends_with(".csv") {
        return Err(Violation::WrongType { expected: ".csv" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn file(name: &str, size_bytes: u64, mime_type: &str) -> ArtifactFile {
        ArtifactFile::new(name, size_bytes, mime_type)
    }

    #[rstest]
    #[case(0)]
    #[case(100 * MIB)]
    fn project_file_within_limit(#[case] size: u64) {
        assert_eq!(validate_project_file(&file("p.zip", size, "application/zip")), Ok(()));
    }

    #[test]
    fn project_file_over_limit() {
        assert_eq!(
            validate_project_file(&file("p.zip", 100 * MIB + 1, "application/zip")),
            Err(Violation::TooLarge { limit_mib: 100 })
        );
    }

    #[test]
    fn video_accepts_video_mime() {
        assert_eq!(validate_demo_video(&file("demo.webm", 500 * MIB, "video/webm")), Ok(()));
    }

    #[test]
    fn video_rejects_other_mime() {
        assert_eq!(
            validate_demo_video(&file("demo.gif", 1024, "image/gif")),
            Err(Violation::WrongType {
                expected: "video/*"
            })
        );
    }

    #[test]
    fn video_size_checked_before_type() {
        assert_eq!(
            validate_demo_video(&file("huge.bin", 600 * MIB, "application/octet-stream")),
            Err(Violation::TooLarge { limit_mib: 500 })
        );
    }

    #[rstest]
    #[case("data.csv")]
    #[case("DATA.CSV")]
    #[case("mixed.CsV")]
    fn dataset_accepts_csv_any_case(#[case] name: &str) {
        assert_eq!(validate_dataset(&file(name, 10 * MIB, "text/csv")), Ok(()));
    }

    #[rstest]
    #[case("data.tsv")]
    #[case("csv")]
    #[case("data.csv.zip")]
    fn dataset_rejects_other_suffixes(#[case] name: &str) {
        assert_eq!(
            validate_dataset(&file(name, 10, "text/csv")),
            Err(Violation::WrongType { expected: ".csv" })
        );
    }

    #[test]
    fn dataset_over_limit() {
        assert_eq!(
            validate_dataset(&file("big.csv", 50 * MIB + 1, "text/csv")),
            Err(Violation::TooLarge { limit_mib: 50 })
        );
    }
}
