use std::path::PathBuf;

use chrono::NaiveDate;

use crate::ClientResult;
use crate::dashboard::{DashboardInputs, default_sellers_date, default_vendors_date};
use crate::ingest::UploadedFile;

/// Upload flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub vendors_path: Option<PathBuf>,
    pub vendors_date: Option<NaiveDate>,
    pub sellers_path: Option<PathBuf>,
    pub sellers_date: Option<NaiveDate>,
}

/// Builds the pipeline snapshot. Files are only read once both paths are
/// known, so a single upload never touches the disk.
pub(crate) fn resolve_inputs(
    uploads: &UploadOptions,
    item: Option<String>,
) -> ClientResult<DashboardInputs> {
    let (vendors, sellers) = match (&uploads.vendors_path, &uploads.sellers_path) {
        (Some(vendors_path), Some(sellers_path)) => (
            Some(UploadedFile::read(vendors_path)?),
            Some(UploadedFile::read(sellers_path)?),
        ),
        (vendors_path, sellers_path) => (
            vendors_path.as_ref().map(|path| placeholder_upload(path)),
            sellers_path.as_ref().map(|path| placeholder_upload(path)),
        ),
    };

    Ok(DashboardInputs {
        vendors,
        vendors_date: uploads.vendors_date.unwrap_or_else(default_vendors_date),
        sellers,
        sellers_date: uploads.sellers_date.unwrap_or_else(default_sellers_date),
        item,
    })
}

fn placeholder_upload(path: &std::path::Path) -> UploadedFile {
    let name = path
        .file_name()
        .map(|value| value.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    UploadedFile::new(&name, "")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{UploadOptions, resolve_inputs};
    use crate::testkit::date;

    #[test]
    fn single_upload_is_not_read_from_disk() {
        let options = UploadOptions {
            vendors_path: Some(PathBuf::from("/definitely/not/here/vendors.csv")),
            ..UploadOptions::default()
        };

        let inputs = resolve_inputs(&options, None);
        assert!(inputs.is_ok());
        if let Ok(value) = inputs {
            assert_eq!(value.vendors.map(|file| file.name).as_deref(), Some("vendors.csv"));
            assert!(value.sellers.is_none());
            assert_eq!(value.vendors_date, date(2025, 8, 23));
            assert_eq!(value.sellers_date, date(2025, 7, 24));
        }
    }

    #[test]
    fn unreadable_paths_fail_once_both_are_given() {
        let options = UploadOptions {
            vendors_path: Some(PathBuf::from("/definitely/not/here/vendors.csv")),
            sellers_path: Some(PathBuf::from("/definitely/not/here/sellers.csv")),
            vendors_date: Some(date(2024, 1, 2)),
            sellers_date: None,
        };

        let inputs = resolve_inputs(&options, None);
        assert!(inputs.is_err());
        if let Err(error) = inputs {
            assert_eq!(error.code, "source_unreadable");
        }
    }
}
