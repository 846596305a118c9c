use license_check::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DependencyReader returning a fixed list of coordinates
#[derive(Clone)]
pub struct MockDependencyReader {
    pub coordinates: Vec<String>,
    pub should_fail: bool,
    pub reads: Arc<AtomicUsize>,
}

impl MockDependencyReader {
    pub fn new(coordinates: &[&str]) -> Self {
        Self {
            coordinates: coordinates.iter().map(|c| c.to_string()).collect(),
            should_fail: false,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(&[])
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DependencyReader for MockDependencyReader {
    fn read_dependencies(&self, _source: &Path) -> Result<Vec<DependencyCoordinate>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock dependency reader failure");
        }
        self.coordinates
            .iter()
            .map(|c| DependencyCoordinate::parse(c))
            .collect()
    }
}
