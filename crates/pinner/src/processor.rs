//! Upload run
//!
//! Scans the images directory for PNG files and pins them one at a time,
//! in directory order. One upload is in flight at any moment; a failed
//! upload is logged with its path and cause, then skipped.

use crate::client::PinataClient;
use crate::errors::PinnerError;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Collect the `.png` files in `dir`, in directory order. An unreadable
/// directory is fatal for the whole run.
pub fn find_png_files(dir: &Path) -> Result<Vec<PathBuf>, PinnerError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_png = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if path.is_file() && is_png {
            files.push(path);
        }
    }

    Ok(files)
}

pub struct UploadProcessor {
    client: PinataClient,
}

impl UploadProcessor {
    pub fn new(client: PinataClient) -> Self {
        Self { client }
    }

    /// Pin every PNG file in `dir`, sequentially. Returns the pinned and
    /// failed counts; per-file failures never abort the run.
    pub async fn pin_directory(&self, dir: &Path) -> Result<(usize, usize), PinnerError> {
        let files = find_png_files(dir)?;

        info!(dir = %dir.display(), count = files.len(), "Pinning PNG files");

        let mut pinned = 0;
        let mut failed = 0;

        for path in &files {
            match self.client.pin_file(path).await {
                Ok(response) => {
                    info!(
                        file = %path.display(),
                        ipfs_hash = %response.ipfs_hash,
                        pin_size = response.pin_size,
                        "File pinned"
                    );
                    pinned += 1;
                }
                Err(e) => {
                    error!(
                        file = %path.display(),
                        error = %e,
                        "Failed to pin file, skipping"
                    );
                    failed += 1;
                }
            }
        }

        Ok((pinned, failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"png bytes").unwrap();
    }

    #[test]
    fn test_find_png_files_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.png");
        touch(dir.path(), "2.PNG");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "noext");

        let mut found = find_png_files(dir.path()).unwrap();
        found.sort();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["1.png", "2.PNG"]);
    }

    #[test]
    fn test_find_png_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();
        touch(dir.path(), "real.png");

        let found = find_png_files(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_unreadable_directory_is_fatal() {
        let err = find_png_files(Path::new("/nonexistent/images")).unwrap_err();
        assert!(matches!(err, PinnerError::IoError(_)));
    }

    // Auth failures are per-file: every upload is attempted and the run
    // still completes.
    #[tokio::test]
    async fn test_pin_directory_survives_per_file_failures() {
        use axum::{http::StatusCode, routing::post, Router};
        use elemint_common::config::PinataConfig;

        let app = Router::new().route(
            "/pinning/pinFileToIPFS",
            post(|| async { StatusCode::UNAUTHORIZED }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.png");
        touch(dir.path(), "2.png");
        touch(dir.path(), "3.png");

        let config = PinataConfig {
            api_url: format!("http://{}/pinning/pinFileToIPFS", addr),
            jwt: None,
            ..PinataConfig::default()
        };
        let processor = UploadProcessor::new(PinataClient::new(&config).unwrap());

        let (pinned, failed) = processor.pin_directory(dir.path()).await.unwrap();
        assert_eq!(pinned, 0);
        assert_eq!(failed, 3);
    }
}
