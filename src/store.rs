use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fetch_error::FetchError;
use crate::timestamp::ObservationTimestamp;

/// Filesystem store for per-(state, timestamp) coordinate artifacts.
///
/// An artifact's existence is the only synchronization marker: once a file is
/// present under `<root>/<state code>/` it is never overwritten or
/// re-validated, and no request is issued for that timestamp again.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, state_code: &str, timestamp: &ObservationTimestamp) -> PathBuf {
        self.root
            .join(state_code)
            .join(format!("{}.csv", timestamp.file_stem()))
    }

    pub fn is_synced(&self, state_code: &str, timestamp: &ObservationTimestamp) -> bool {
        self.artifact_path(state_code, timestamp).exists()
    }

    /// Write one coordinate record per line, creating the per-state directory
    /// on demand. An empty record set still produces the artifact file, which
    /// marks the timestamp as synchronized on later runs.
    pub fn write_records(
        &self,
        state_code: &str,
        timestamp: &ObservationTimestamp,
        records: &[String],
    ) -> Result<PathBuf, FetchError> {
        let path = self.artifact_path(state_code, timestamp);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut file = File::create(&path)?;
        for record in records {
            file.write_all(record.as_bytes())?;
            file.write_all(b"\n")?;
        }

        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> ObservationTimestamp {
        ObservationTimestamp::new(raw)
    }

    #[test]
    fn test_artifact_path_sanitizes_colons_only() {
        let store = ArtifactStore::new("/data");
        let path = store.artifact_path("PB", &ts("2024-01-05 10:00:00"));
        assert_eq!(
            path,
            PathBuf::from("/data/PB/2024-01-05 10_00_00.csv")
        );
    }

    #[test]
    fn test_write_then_is_synced() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let timestamp = ts("2024-01-05 10:00:00");

        assert!(!store.is_synced("PB", &timestamp));

        let path = store
            .write_records("PB", &timestamp, &["75.1,30.2,0".to_string()])
            .unwrap();

        assert!(store.is_synced("PB", &timestamp));
        assert_eq!(fs::read_to_string(path).unwrap(), "75.1,30.2,0\n");
    }

    #[test]
    fn test_records_written_one_per_line_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let timestamp = ts("2024-01-05 10:05:00");

        let records = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let path = store.write_records("HR", &timestamp, &records).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "A\nB\nC\n");
    }

    #[test]
    fn test_empty_record_set_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let timestamp = ts("2024-01-05 10:00:00");

        let path = store.write_records("UP", &timestamp, &[]).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "");
        assert!(store.is_synced("UP", &timestamp));
    }
}
