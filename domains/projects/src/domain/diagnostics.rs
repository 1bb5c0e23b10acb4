//! Diagnostic reporting for rejected project state
//!
//! Deep validation failures are reported here as a grouped report before the
//! creating call returns an error. The error itself only carries a summary.

use std::sync::{Arc, Mutex};

/// Grouped report of everything wrong with one state document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub project_id: String,
    /// Group header naming the offending project
    pub header: String,
    /// One rendered line per structural error
    pub lines: Vec<String>,
}

/// Destination of diagnostic reports
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, report: &DiagnosticReport);
}

/// Emits reports as tracing events grouped under one span
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, report: &DiagnosticReport) {
        let span = tracing::warn_span!("invalid_project_state", project_id = %report.project_id);
        let _entered = span.enter();

        tracing::warn!("{}", report.header);
        for line in &report.lines {
            tracing::warn!(diagnostic = %line, "{}", line);
        }
    }
}

/// In-memory sink that keeps every report for test assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnosticSink {
    reports: Arc<Mutex<Vec<DiagnosticReport>>>,
}

impl RecordingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all recorded reports.
    pub fn reports(&self) -> Vec<DiagnosticReport> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    /// Total number of diagnostic lines across all reports
    pub fn line_count(&self) -> usize {
        self.reports().iter().map(|r| r.lines.len()).sum()
    }

    /// Clear all recorded reports.
    pub fn reset(&self) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.clear();
        }
    }
}

impl DiagnosticSink for RecordingDiagnosticSink {
    fn report(&self, report: &DiagnosticReport) {
        tracing::debug!(
            project_id = %report.project_id,
            lines = report.lines.len(),
            "Recording diagnostic report"
        );
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report.clone());
        }
    }
}
