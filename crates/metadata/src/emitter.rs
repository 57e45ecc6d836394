//! Sequential metadata emission
//!
//! Writes one `<number>.json` file per transformed record, strictly in input
//! order. The record-to-record serialization is a contract, not an
//! implementation detail: log output stays deterministic and at most one
//! output file handle is open at a time. A failed write is logged with the
//! record's name and skipped; the run always attempts every record.

use crate::errors::PipelineError;
use crate::transform::MetadataRecord;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct Emitter {
    output_dir: PathBuf,
}

impl Emitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write all records to `<output_dir>/<number>.json`, one at a time, in
    /// the order given. Creates the output directory if absent. Returns the
    /// number of files written; per-item failures reduce the count but never
    /// abort the run.
    pub async fn emit_all(
        &self,
        records: &[(u32, MetadataRecord)],
    ) -> Result<usize, PipelineError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut written = 0;

        for (number, record) in records {
            let path = self.output_dir.join(format!("{}.json", number));
            match self.emit_one(&path, record).await {
                Ok(()) => {
                    info!(
                        name = %record.name,
                        path = %path.display(),
                        "Created metadata entry"
                    );
                    written += 1;
                }
                Err(e) => {
                    error!(
                        name = %record.name,
                        path = %path.display(),
                        error = %e,
                        "Failed to write metadata entry, skipping"
                    );
                }
            }
        }

        Ok(written)
    }

    async fn emit_one(&self, path: &Path, record: &MetadataRecord) -> std::io::Result<()> {
        // to_vec on a struct of strings and numbers cannot fail, but a
        // surprise here must stay per-item like any other write error
        let bytes = serde_json::to_vec(record).map_err(std::io::Error::other)?;
        tokio::fs::write(path, bytes).await
    }
}
