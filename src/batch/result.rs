//! Batch result types.
//!
//! One [`ArtifactResult`] per written artifact, collected into a
//! [`BatchResult`] ledger.

use std::path::PathBuf;
use std::time::Duration;

/// Status of a single artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Artifact written
    Success,
    /// Artifact not produced, e.g. its input is missing
    Skipped(String),
    Failed(String),
}

impl ArtifactStatus {
    /// Skips count as success: the batch carries on without them.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ArtifactStatus::Failed(_))
    }
}

impl std::fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactStatus::Success => write!(f, "success"),
            ArtifactStatus::Skipped(reason) => write!(f, "skipped: {}", reason),
            ArtifactStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Outcome of producing one artifact, e.g. `white/idle_0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactResult {
    pub id: String,
    pub status: ArtifactStatus,
    /// Files written, empty unless the artifact succeeded
    pub outputs: Vec<PathBuf>,
}

impl ArtifactResult {
    pub fn success(id: impl Into<String>, outputs: Vec<PathBuf>) -> Self {
        Self { id: id.into(), status: ArtifactStatus::Success, outputs }
    }

    pub fn skipped(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { id: id.into(), status: ArtifactStatus::Skipped(reason.into()), outputs: Vec::new() }
    }

    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self { id: id.into(), status: ArtifactStatus::Failed(error.into()), outputs: Vec::new() }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Every artifact of a batch run, in plan order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub artifacts: Vec<ArtifactResult>,
    pub total_duration: Duration,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: ArtifactResult) {
        self.artifacts.push(result);
    }

    /// Append results, keeping their order.
    pub fn extend(&mut self, results: impl IntoIterator<Item = ArtifactResult>) {
        self.artifacts.extend(results);
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    fn count(&self, pred: impl Fn(&ArtifactStatus) -> bool) -> usize {
        self.artifacts.iter().filter(|r| pred(&r.status)).count()
    }

    pub fn success_count(&self) -> usize {
        self.count(|s| *s == ArtifactStatus::Success)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::Skipped(_)))
    }

    pub fn failed_count(&self) -> usize {
        self.count(ArtifactStatus::is_failure)
    }

    /// No artifact failed. Skips are allowed.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Every file written, in plan order.
    pub fn all_outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.artifacts.iter().flat_map(|r| r.outputs.iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArtifactResult> {
        self.artifacts.iter().filter(|r| r.status.is_failure())
    }

    /// Look up a result by artifact ID.
    pub fn get(&self, id: &str) -> Option<&ArtifactResult> {
        self.artifacts.iter().find(|r| r.id == id)
    }

    /// One status line, followed by one line per failed artifact.
    pub fn summary(&self) -> String {
        let (written, skipped, failed) =
            (self.success_count(), self.skipped_count(), self.failed_count());
        let total = self.artifacts.len();

        if failed == 0 {
            return format!(
                "Batch succeeded: {} written, {} skipped ({} total) in {:?}",
                written, skipped, total, self.total_duration
            );
        }

        let mut lines = vec![format!(
            "Batch failed: {} written, {} skipped, {} failed ({} total)",
            written, skipped, failed, total
        )];
        lines.extend(self.failures().map(|a| format!("  - {}: {}", a.id, a.status)));
        lines.join("\n")
    }
}
