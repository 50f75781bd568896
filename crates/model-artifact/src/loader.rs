//! Artifact Loading and Process-Wide Caching

use crate::{ArtifactError, ArtifactFile, ScoringPipeline, FORMAT_VERSION};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, info};

/// Load a scoring artifact from disk.
///
/// Existence is checked before deserialization so a missing file reports
/// as [`ArtifactError::NotFound`] rather than an opaque io error, and the
/// tagged payload is normalized before it reaches any caller.
pub fn load(path: &Path) -> Result<ScoringPipeline, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ArtifactFile =
        postcard::from_bytes(&bytes).map_err(|e| ArtifactError::Incompatible {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if file.format_version != FORMAT_VERSION {
        return Err(ArtifactError::Incompatible {
            path: path.to_path_buf(),
            reason: format!(
                "format version {} (this build loads version {})",
                file.format_version, FORMAT_VERSION
            ),
        });
    }

    info!("Loaded scoring artifact from {}", path.display());
    Ok(file.payload.normalize())
}

/// Write an artifact envelope to disk.
///
/// Counterpart of [`load`] used by fixtures and deployment tooling;
/// training itself stays external.
pub fn save(file: &ArtifactFile, path: &Path) -> Result<(), ArtifactError> {
    let bytes = postcard::to_allocvec(file).map_err(|e| ArtifactError::Incompatible {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    fs::write(path, bytes).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote scoring artifact to {}", path.display());
    Ok(())
}

/// Process-wide artifact handle, loaded at most once.
///
/// The slot fills exactly once under the init lock; afterwards reads are
/// lock-free and hand out clones of the same `Arc`. A failed load leaves
/// the slot empty, so the underlying configuration problem is reported on
/// every attempt instead of being cached.
pub struct ArtifactCache {
    path: PathBuf,
    slot: OnceLock<Arc<ScoringPipeline>>,
    init: Mutex<()>,
}

impl ArtifactCache {
    /// Create a cache for the artifact at `path` without loading it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Configured artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the artifact has been loaded
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Get the shared pipeline, loading it on first use
    pub fn get(&self) -> Result<Arc<ScoringPipeline>, ArtifactError> {
        if let Some(pipeline) = self.slot.get() {
            return Ok(Arc::clone(pipeline));
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        // A concurrent first access may have filled the slot while we
        // waited on the lock.
        if let Some(pipeline) = self.slot.get() {
            return Ok(Arc::clone(pipeline));
        }

        let pipeline = Arc::new(load(&self.path)?);
        let _ = self.slot.set(Arc::clone(&pipeline));
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArtifactPayload, Classifier, ColumnEncoder, FittedTransformer};
    use record_schema::EmployeeRecord;

    fn sample_file() -> ArtifactFile {
        let transformer = FittedTransformer::new(vec![
            ColumnEncoder::Standardize {
                field: "Age".to_string(),
                mean: 30.0,
                std_dev: 10.0,
            },
            ColumnEncoder::OneHot {
                field: "OverTime".to_string(),
                categories: vec!["No".to_string(), "Yes".to_string()],
            },
        ]);
        let classifier = Classifier::new(vec![0.5, 0.0, 1.5], -1.0);
        ArtifactFile::new(ArtifactPayload::Paired {
            transformer,
            classifier,
        })
    }

    fn sample_record() -> EmployeeRecord {
        let mut record = EmployeeRecord::new();
        record.set("Age", 40).set("OverTime", "Yes");
        record
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn test_load_corrupt_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.bin");
        fs::write(&path, b"not an artifact").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Incompatible { .. }));
    }

    #[test]
    fn test_load_rejects_version_skew() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.bin");

        let mut file = sample_file();
        file.format_version = FORMAT_VERSION + 1;
        save(&file, &path).unwrap();

        let err = load(&path).unwrap_err();
        match err {
            ArtifactError::Incompatible { reason, .. } => {
                assert!(reason.contains("format version"));
            }
            other => panic!("expected Incompatible, got {other:?}"),
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.bin");

        save(&sample_file(), &path).unwrap();
        let pipeline = load(&path).unwrap();

        let features = pipeline.transform(&sample_record()).unwrap();
        assert_eq!(features, vec![1.0, 0.0, 1.0]);

        let probability = pipeline.predict_proba(&features).unwrap();
        // 0.5*1.0 + 1.5*1.0 - 1.0 = 1.0
        assert!((probability - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_cache_returns_shared_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.bin");
        save(&sample_file(), &path).unwrap();

        let cache = ArtifactCache::new(&path);
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_cache_does_not_retain_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.bin");

        let cache = ArtifactCache::new(&path);
        assert!(matches!(
            cache.get().unwrap_err(),
            ArtifactError::NotFound { .. }
        ));
        assert!(!cache.is_loaded());

        // The artifact appearing later must not be masked by a cached error.
        save(&sample_file(), &path).unwrap();
        assert!(cache.get().is_ok());
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.bin");
        save(&sample_file(), &path).unwrap();

        let cache = Arc::new(ArtifactCache::new(&path));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get().unwrap())
            })
            .collect();

        let pipelines: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for pipeline in &pipelines[1..] {
            assert!(Arc::ptr_eq(&pipelines[0], pipeline));
        }
    }
}
